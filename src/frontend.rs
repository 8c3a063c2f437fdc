use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use serde_json::json;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlCanvasElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Node};
use yew::prelude::*;

use crate::canvas::ParticleCanvas;
use crate::carousel::{CarouselAction, CarouselIndex, TimerSlot};
use crate::contact::{ContactForm, Submission};
use crate::content::{FilterTag, PortfolioItem, SiteContent, Skill, Testimonial};
use crate::dom::{
    scroll_offset, smooth_scroll_to, system_prefers_light, AnimationFrame, DocumentRootSurface,
    EventListener, FrameLoop, Interval, LocalPreferenceStore, OneShotObserver, Timeout,
};
use crate::logging::{log_event, LogLevel};
use crate::nav::{is_activation_key, NavState};
use crate::parallax::{parallax_offset, parallax_transform, Bounds, RESTING_TRANSFORM};
use crate::portfolio::{visible_indices, FilterAction, FilterView, HIDE_DELAY_MS, RESTORE_DELAY_MS};
use crate::reveal::{
    skill_bar_width, OneShotTracker, SECTION_HIDDEN_STYLE, SECTION_SHOWN_STYLE, SECTION_THRESHOLD,
    SKILL_BAR_DELAY_MS, SKILL_BAR_THRESHOLD,
};
use crate::scroll::{anchor_scroll_top, anchor_target, ScrollCoalescer, ScrollState};
use crate::settings::SiteSettings;
use crate::theme::ThemeController;

const HEADER_ID: &str = "header";
const SECTION_INDEX_ATTR: &str = "data-section-index";
const SKILL_INDEX_ATTR: &str = "data-skill-index";
const STARTUP_FADE_DELAY_MS: u32 = 80;

#[hook]
fn use_settings() -> SiteSettings {
    use_context::<SiteSettings>().unwrap_or_default()
}

pub enum NavAction {
    Toggle,
    Close,
    DocumentClick { inside: bool },
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::Toggle => self.toggled(),
            NavAction::Close => NavState::closed(),
            NavAction::DocumentClick { inside } => self.after_document_click(inside),
        };

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Smooth-scrolls to the section `href` names, leaving room for the header.
/// Returns `false` (and leaves the click alone) when there is no such section.
fn scroll_to_anchor(event: &MouseEvent, href: &str) -> bool {
    let Some(id) = anchor_target(href) else {
        return false;
    };
    let Some(document) = window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(target) = document.get_element_by_id(id) else {
        return false;
    };

    event.prevent_default();
    let header_height = document
        .get_element_by_id(HEADER_ID)
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(0.0);
    let top = anchor_scroll_top(
        target.get_bounding_client_rect().top(),
        scroll_offset(),
        header_height,
    );
    smooth_scroll_to(top);
    true
}

#[derive(Properties, PartialEq)]
struct AnchorLinkProps {
    href: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    on_navigate: Callback<()>,
    #[prop_or_default]
    children: Html,
}

#[function_component(AnchorLink)]
fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |event: MouseEvent| {
            if scroll_to_anchor(&event, &href) {
                on_navigate.emit(());
            }
        })
    };

    html! {
        <a class={props.class.clone()} href={props.href.clone()} {onclick}>
            {props.children.clone()}
        </a>
    }
}

#[hook]
fn use_scroll_state() -> ScrollState {
    let state = use_state_eq(|| ScrollState::at_offset(scroll_offset()));

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let coalescer = Rc::new(RefCell::new(ScrollCoalescer::default()));
            let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();

            let listener = window().and_then(|win| {
                let frame = Rc::clone(&frame);
                EventListener::passive(&win, "scroll", move |_| {
                    if !coalescer.borrow_mut().record(scroll_offset()) {
                        return;
                    }

                    let flush = {
                        let coalescer = Rc::clone(&coalescer);
                        let state = state.clone();
                        move || state.set(coalescer.borrow_mut().flush())
                    };
                    match AnimationFrame::request(flush) {
                        Some(request) => *frame.borrow_mut() = Some(request),
                        None => state.set(coalescer.borrow_mut().flush()),
                    }
                })
            });

            move || {
                drop(listener);
                frame.borrow_mut().take();
            }
        });
    }

    *state
}

#[hook]
fn use_outside_click(
    nav: UseReducerDispatcher<NavState>,
    nav_ref: NodeRef,
    toggle_ref: NodeRef,
) {
    use_effect_with((), move |_| {
        let listener = window().and_then(|w| w.document()).and_then(|document| {
            EventListener::new(&document, "click", move |event| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                let inside = [&nav_ref, &toggle_ref].iter().any(|node_ref| {
                    node_ref
                        .get()
                        .map(|node| node.contains(target.as_ref()))
                        .unwrap_or(false)
                });
                nav.dispatch(NavAction::DocumentClick { inside });
            })
        });

        move || drop(listener)
    });
}

#[hook]
fn use_startup_fade() {
    use_effect_with((), move |_| {
        let body = window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        let timeout = body.and_then(|body| {
            let style = body.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transition", "opacity .45s ease");
            Timeout::new(STARTUP_FADE_DELAY_MS, move || {
                let _ = body.style().set_property("opacity", "1");
            })
        });

        move || drop(timeout)
    });
}

#[derive(Default, PartialEq)]
struct RevealedSet {
    all: bool,
    indices: HashSet<usize>,
}

impl RevealedSet {
    fn contains(&self, index: usize) -> bool {
        self.all || self.indices.contains(&index)
    }
}

enum RevealAction {
    Reveal(usize),
    RevealAll,
}

impl Reducible for RevealedSet {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Reveal(index) if !self.contains(index) => {
                let mut indices = self.indices.clone();
                indices.insert(index);
                Rc::new(Self {
                    all: self.all,
                    indices,
                })
            }
            RevealAction::RevealAll if !self.all => Rc::new(Self {
                all: true,
                indices: self.indices.clone(),
            }),
            _ => self,
        }
    }
}

fn reveal_index(target: &Element, attribute: &str) -> Option<usize> {
    target.get_attribute(attribute)?.parse().ok()
}

/// Watches every `[attribute]` element under `container` and reveals each
/// one, by its index, the first time it crosses `threshold`.
#[hook]
fn use_one_shot_reveal(
    container: NodeRef,
    attribute: &'static str,
    threshold: f64,
    delay_ms: Option<u32>,
) -> UseReducerHandle<RevealedSet> {
    let revealed = use_reducer(RevealedSet::default);
    let settings = use_settings();

    {
        let dispatcher = revealed.dispatcher();
        use_effect_with(container, move |container| {
            let timers: Rc<RefCell<Vec<Timeout>>> = Rc::default();

            let observer = container.cast::<Element>().and_then(|root| {
                let timers = Rc::clone(&timers);
                let dispatcher = dispatcher.clone();
                let mut tracker = OneShotTracker::default();
                let observer = OneShotObserver::new(threshold, move |target, intersecting| {
                    let Some(index) = reveal_index(target, attribute) else {
                        return true;
                    };
                    if !tracker.observe(index, intersecting) {
                        return false;
                    }

                    let dispatcher = dispatcher.clone();
                    match delay_ms {
                        Some(delay) => {
                            if let Some(timer) =
                                Timeout::new(delay, move || dispatcher.dispatch(RevealAction::Reveal(index)))
                            {
                                timers.borrow_mut().push(timer);
                            }
                        }
                        None => dispatcher.dispatch(RevealAction::Reveal(index)),
                    }
                    true
                })?;

                let targets = root.query_selector_all(&format!("[{attribute}]")).ok()?;
                for position in 0..targets.length() {
                    if let Some(target) = targets.item(position).and_then(|node| node.dyn_into::<Element>().ok()) {
                        observer.observe(&target);
                    }
                }
                Some(observer)
            });

            if observer.is_none() {
                log_event(
                    &settings,
                    LogLevel::Debug,
                    "reveal_skipped",
                    json!({ "attribute": attribute }),
                );
                dispatcher.dispatch(RevealAction::RevealAll);
            }

            move || {
                drop(observer);
                timers.borrow_mut().clear();
            }
        });
    }

    revealed
}

fn start_particles(
    settings: &SiteSettings,
    container_ref: &NodeRef,
    canvas_ref: &NodeRef,
) -> Option<(FrameLoop, Option<EventListener>)> {
    let (Some(container), Some(canvas)) = (
        container_ref.cast::<HtmlElement>(),
        canvas_ref.cast::<HtmlCanvasElement>(),
    ) else {
        log_event(settings, LogLevel::Debug, "particles_skipped", json!({ "reason": "missing container" }));
        return None;
    };

    let particle_canvas = match ParticleCanvas::new(container, canvas) {
        Ok(particle_canvas) => Rc::new(RefCell::new(particle_canvas)),
        Err(_) => {
            log_event(settings, LogLevel::Debug, "particles_skipped", json!({ "reason": "no 2d context" }));
            return None;
        }
    };
    log_event(
        settings,
        LogLevel::Info,
        "particles_started",
        json!({ "count": particle_canvas.borrow().particle_count() }),
    );

    let resize = window().and_then(|win| {
        let particle_canvas = Rc::clone(&particle_canvas);
        EventListener::new(&win, "resize", move |_| particle_canvas.borrow_mut().resize())
    });
    let frames = FrameLoop::start(move || particle_canvas.borrow_mut().frame())?;

    Some((frames, resize))
}

#[function_component(ParticleBackdrop)]
fn particle_backdrop() -> Html {
    let settings = use_settings();
    let container_ref = use_node_ref();
    let canvas_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), canvas_ref.clone()),
        move |(container_ref, canvas_ref)| {
            let running = start_particles(&settings, container_ref, canvas_ref);
            move || drop(running)
        },
    );

    html! {
        <div id="particles" class="particles" ref={container_ref} aria-hidden="true">
            <canvas ref={canvas_ref}></canvas>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    owner: AttrValue,
    tagline: AttrValue,
    on_navigate: Callback<()>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let hero_ref = use_node_ref();
    let transform = use_state_eq(|| RESTING_TRANSFORM.to_string());

    let onmousemove = {
        let hero_ref = hero_ref.clone();
        let transform = transform.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(hero) = hero_ref.cast::<Element>() else {
                return;
            };
            let rect = hero.get_bounding_client_rect();
            let bounds = Bounds {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            };
            let offset = parallax_offset(f64::from(event.client_x()), f64::from(event.client_y()), bounds);
            transform.set(parallax_transform(offset));
        })
    };

    let onmouseleave = {
        let transform = transform.clone();
        Callback::from(move |_| transform.set(RESTING_TRANSFORM.to_string()))
    };

    html! {
        <div class="showcase" ref={hero_ref} {onmousemove} {onmouseleave}>
            <ParticleBackdrop />
            <div class="showcase-content" style={format!("transform: {};", *transform)}>
                <h1>{"Hi, I'm "}<span class="accent">{props.owner.clone()}</span></h1>
                <p class="tagline">{props.tagline.clone()}</p>
                <div class="showcase-actions">
                    <AnchorLink href="#portfolio" class={classes!("btn")} on_navigate={props.on_navigate.clone()}>
                        {"View my work"}
                    </AnchorLink>
                    <AnchorLink href="#contact" class={classes!("btn", "btn-outline")} on_navigate={props.on_navigate.clone()}>
                        {"Get in touch"}
                    </AnchorLink>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SkillsProps {
    skills: Vec<Skill>,
}

#[function_component(Skills)]
fn skills(props: &SkillsProps) -> Html {
    let list_ref = use_node_ref();
    let revealed = use_one_shot_reveal(
        list_ref.clone(),
        SKILL_INDEX_ATTR,
        SKILL_BAR_THRESHOLD,
        Some(SKILL_BAR_DELAY_MS),
    );

    html! {
        <div class="skills-list" ref={list_ref}>
            { for props.skills.iter().enumerate().map(|(index, skill)| {
                let width = if revealed.contains(index) { skill.percent } else { 0 };
                html! {
                    <div class="skill">
                        <div class="skill-info">
                            <span>{skill.name.clone()}</span>
                            <span>{format!("{}%", skill.percent)}</span>
                        </div>
                        <div class="skill-bar" data-skill-index={index.to_string()}>
                            <div
                                class="skill-progress"
                                data-width={skill.percent.to_string()}
                                style={skill_bar_width(width)}
                            ></div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

impl Reducible for FilterView {
    type Action = FilterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[derive(Properties, PartialEq)]
struct PortfolioProps {
    filters: Vec<FilterTag>,
    items: Vec<PortfolioItem>,
}

#[function_component(Portfolio)]
fn portfolio(props: &PortfolioProps) -> Html {
    let settings = use_settings();
    let view = use_reducer(FilterView::default);
    let pending = use_mut_ref(Vec::<Timeout>::new);

    let on_filter = {
        let view = view.clone();
        let pending = pending.clone();
        let categories: Vec<String> = props.items.iter().map(|item| item.category.clone()).collect();
        Callback::from(move |tag: String| {
            let visible = visible_indices(&tag, categories.iter().map(String::as_str)).len();
            log_event(
                &settings,
                LogLevel::Debug,
                "portfolio_filtered",
                json!({ "filter": tag, "visible": visible }),
            );
            view.dispatch(FilterAction::Select(tag));

            let swap = view.dispatcher();
            let restore = view.dispatcher();
            *pending.borrow_mut() = [
                Timeout::new(HIDE_DELAY_MS, move || swap.dispatch(FilterAction::Swap)),
                Timeout::new(HIDE_DELAY_MS + RESTORE_DELAY_MS, move || {
                    restore.dispatch(FilterAction::Restore)
                }),
            ]
            .into_iter()
            .flatten()
            .collect();
        })
    };

    html! {
        <>
            <div class="portfolio-filters">
                { for props.filters.iter().map(|filter| {
                    let onclick = {
                        let on_filter = on_filter.clone();
                        let tag = filter.tag.clone();
                        Callback::from(move |_: MouseEvent| on_filter.emit(tag.clone()))
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!("filter-btn", (view.selected == filter.tag).then_some("active"))}
                            data-filter={filter.tag.clone()}
                            {onclick}
                        >
                            {filter.label.clone()}
                        </button>
                    }
                }) }
            </div>
            <div class="portfolio-grid">
                { for props.items.iter().map(|item| html! {
                    <article
                        class="portfolio-item"
                        data-category={item.category.clone()}
                        style={view.item_style(&item.category)}
                    >
                        <h3>{item.title.clone()}</h3>
                        <p class="muted">{item.summary.clone()}</p>
                    </article>
                }) }
            </div>
        </>
    }
}

#[derive(PartialEq)]
struct CarouselModel(Option<CarouselIndex>);

impl Reducible for CarouselModel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.map(|carousel| carousel.apply(action))))
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialsProps {
    testimonials: Vec<Testimonial>,
}

#[function_component(Testimonials)]
fn testimonials(props: &TestimonialsProps) -> Html {
    let settings = use_settings();
    let slide_count = props.testimonials.len();
    let carousel = use_reducer(move || CarouselModel(CarouselIndex::new(slide_count)));
    let timer = use_mut_ref(TimerSlot::<Interval>::default);

    let restart = {
        let timer = timer.clone();
        let dispatcher = carousel.dispatcher();
        let period_ms = settings.carousel_interval_ms;
        Callback::from(move |_: ()| {
            let dispatcher = dispatcher.clone();
            timer.borrow_mut().restart(move || {
                Interval::new(period_ms, move || dispatcher.dispatch(CarouselAction::Next))
            });
        })
    };

    {
        let restart = restart.clone();
        let timer = timer.clone();
        let enabled = carousel.0.is_some();
        use_effect_with(enabled, move |enabled| {
            if *enabled {
                restart.emit(());
                log_event(
                    &settings,
                    LogLevel::Debug,
                    "carousel_started",
                    json!({ "slides": slide_count, "period_ms": settings.carousel_interval_ms }),
                );
            }
            move || timer.borrow_mut().stop()
        });
    }

    let Some(active) = carousel.0.map(CarouselIndex::current) else {
        return html! {};
    };

    let onmouseenter = {
        let timer = timer.clone();
        Callback::from(move |_: MouseEvent| timer.borrow_mut().stop())
    };
    let onmouseleave = {
        let restart = restart.clone();
        Callback::from(move |_: MouseEvent| restart.emit(()))
    };

    html! {
        <div class="testimonials">
            <div class="testimonial-track">
                { for props.testimonials.iter().enumerate().map(|(index, testimonial)| html! {
                    <blockquote
                        class={classes!("testimonial-slide", (index == active).then_some("active"))}
                        onmouseenter={onmouseenter.clone()}
                        onmouseleave={onmouseleave.clone()}
                    >
                        <p>{format!("\u{201c}{}\u{201d}", testimonial.quote)}</p>
                        <footer>
                            <strong>{testimonial.author.clone()}</strong>
                            <span class="muted">{format!(", {}", testimonial.role)}</span>
                        </footer>
                    </blockquote>
                }) }
            </div>
            <div class="testimonial-nav">
                { for (0..slide_count).map(|index| {
                    let onclick = {
                        let carousel = carousel.clone();
                        let restart = restart.clone();
                        Callback::from(move |_: MouseEvent| {
                            carousel.dispatch(CarouselAction::Select(index));
                            restart.emit(());
                        })
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!("nav-dot", (index == active).then_some("active"))}
                            aria-label={format!("Show testimonial {}", index + 1)}
                            {onclick}
                        ></button>
                    }
                }) }
            </div>
        </div>
    }
}

pub enum ContactAction {
    Name(String),
    Email(String),
    Message(String),
    Replace(ContactForm),
    Complete(Submission),
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Name(value) => next.name = value,
            ContactAction::Email(value) => next.email = value,
            ContactAction::Message(value) => next.message = value,
            ContactAction::Replace(form) => next = form,
            ContactAction::Complete(submission) => next.complete(&submission),
        }
        Rc::new(next)
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let settings = use_settings();
    let form = use_reducer(ContactForm::default);
    let pending = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let form = form.clone();
        let pending = pending.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let mut next = (*form).clone();
            let submission = next.submit();
            form.dispatch(ContactAction::Replace(next));

            let Some(submission) = submission else {
                log_event(&settings, LogLevel::Debug, "contact_rejected", json!({}));
                return;
            };
            log_event(
                &settings,
                LogLevel::Info,
                "contact_sending",
                json!({
                    "email_domain": submission.email.rsplit('@').next(),
                    "message_chars": submission.message.chars().count(),
                }),
            );

            let dispatcher = form.dispatcher();
            *pending.borrow_mut() = Timeout::new(settings.contact_delay_ms, move || {
                dispatcher.dispatch(ContactAction::Complete(submission))
            });
        })
    };

    let on_name = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            dispatcher.dispatch(ContactAction::Name(input.value()));
        })
    };
    let on_email = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            dispatcher.dispatch(ContactAction::Email(input.value()));
        })
    };
    let on_message = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            let input: HtmlTextAreaElement = event.target_unchecked_into();
            dispatcher.dispatch(ContactAction::Message(input.value()));
        })
    };

    let (status_text, status_color) = match form.status.as_ref() {
        Some(status) => (status.text.clone(), status.tone.color()),
        None => (String::new(), "var(--light)"),
    };

    html! {
        <form id="contactForm" class="contact-form" novalidate={true} {onsubmit}>
            <div class="contact-message" role="status" style={format!("margin-bottom:12px;color:{status_color};")}>
                {status_text}
            </div>
            <input type="text" placeholder="Your name" value={form.name.clone()} oninput={on_name} />
            <input type="email" placeholder="Your email" value={form.email.clone()} oninput={on_email} />
            <textarea placeholder="Your message" rows="5" value={form.message.clone()} oninput={on_message}></textarea>
            <button type="submit" class="btn">{"Send message"}</button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub settings: SiteSettings,
    pub content: Rc<SiteContent>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let settings = props.settings.clone();
    let content = props.content.clone();
    let nav_ref = use_node_ref();
    let menu_toggle_ref = use_node_ref();
    let main_ref = use_node_ref();

    let nav = use_reducer(NavState::default);
    let scroll = use_scroll_state();
    let theme_controller = use_mut_ref(|| {
        ThemeController::init(LocalPreferenceStore, DocumentRootSurface, system_prefers_light())
    });
    let theme = use_state_eq(|| theme_controller.borrow().theme());
    let sections = use_one_shot_reveal(main_ref.clone(), SECTION_INDEX_ATTR, SECTION_THRESHOLD, None);

    use_startup_fade();
    use_outside_click(nav.dispatcher(), nav_ref.clone(), menu_toggle_ref.clone());

    {
        let settings = settings.clone();
        let content = content.clone();
        let theme = *theme;
        use_effect_with((), move |_| {
            log_event(
                &settings,
                LogLevel::Info,
                "site_mounted",
                json!({
                    "theme": theme.as_str(),
                    "portfolio_items": content.portfolio.len(),
                    "testimonials": content.testimonials.len(),
                }),
            );
            || ()
        });
    }

    let close_nav = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(NavAction::Close))
    };

    let on_menu_click = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::Toggle))
    };

    let on_menu_key = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |event: KeyboardEvent| {
            if is_activation_key(&event.key()) {
                event.prevent_default();
                dispatcher.dispatch(NavAction::Toggle);
            }
        })
    };

    let on_theme_toggle = {
        let controller = theme_controller.clone();
        let theme = theme.clone();
        let settings = settings.clone();
        Callback::from(move |_: MouseEvent| {
            let next = controller.borrow_mut().toggle();
            log_event(&settings, LogLevel::Debug, "theme_toggled", json!({ "theme": next.as_str() }));
            theme.set(next);
        })
    };

    let section_style = |index: usize| {
        if sections.contains(index) {
            SECTION_SHOWN_STYLE
        } else {
            SECTION_HIDDEN_STYLE
        }
    };

    html! {
        <ContextProvider<SiteSettings> context={settings}>
            <header id={HEADER_ID} class={classes!("header", scroll.header_scrolled.then_some("scrolled"))}>
                <div class="container nav-container">
                    <AnchorLink href="#home" class={classes!("logo")} on_navigate={close_nav.clone()}>
                        {content.owner.clone()}
                    </AnchorLink>
                    <ul
                        id="nav-links"
                        ref={nav_ref}
                        class={classes!("nav-links", nav.is_open().then_some("open"))}
                    >
                        { for content.nav.iter().map(|link| html! {
                            <li>
                                <AnchorLink href={format!("#{}", link.target)} on_navigate={close_nav.clone()}>
                                    {link.label.clone()}
                                </AnchorLink>
                            </li>
                        }) }
                    </ul>
                    <div class="nav-actions">
                        <button
                            id="themeToggle"
                            class="theme-toggle"
                            type="button"
                            aria-label={theme.toggle_label()}
                            aria-pressed={theme.pressed().to_string()}
                            onclick={on_theme_toggle}
                        >
                            <i class={theme.icon()}></i>
                        </button>
                        <button
                            id="menuToggle"
                            ref={menu_toggle_ref}
                            class="menu-toggle"
                            type="button"
                            aria-label="Toggle navigation"
                            aria-controls="nav-links"
                            aria-expanded={nav.aria_expanded()}
                            onclick={on_menu_click}
                            onkeydown={on_menu_key}
                        >
                            <i class={nav.icon()}></i>
                        </button>
                    </div>
                </div>
            </header>

            <main ref={main_ref}>
                <section id="home" data-section-index="0" style={section_style(0)}>
                    <Hero
                        owner={content.owner.clone()}
                        tagline={content.tagline.clone()}
                        on_navigate={close_nav.clone()}
                    />
                </section>

                <section id="about" class="container" data-section-index="1" style={section_style(1)}>
                    <h2>{"About"}</h2>
                    <p>{content.about.clone()}</p>
                </section>

                <section id="skills" class="container" data-section-index="2" style={section_style(2)}>
                    <h2>{"Skills"}</h2>
                    <Skills skills={content.skills.clone()} />
                </section>

                <section id="portfolio" class="container" data-section-index="3" style={section_style(3)}>
                    <h2>{"Portfolio"}</h2>
                    <Portfolio filters={content.filters.clone()} items={content.portfolio.clone()} />
                </section>

                <section id="testimonials" class="container" data-section-index="4" style={section_style(4)}>
                    <h2>{"Testimonials"}</h2>
                    <Testimonials testimonials={content.testimonials.clone()} />
                </section>

                <section id="contact" class="container" data-section-index="5" style={section_style(5)}>
                    <h2>{"Contact"}</h2>
                    <Contact />
                </section>
            </main>

            <footer class="footer">
                <p class="muted">{format!("\u{a9} {}", content.owner)}</p>
            </footer>

            <button
                id="backToTop"
                class={classes!("back-to-top", scroll.back_to_top_visible.then_some("active"))}
                type="button"
                aria-label="Back to top"
                onclick={Callback::from(|_: MouseEvent| smooth_scroll_to(0.0))}
            >
                <i class="fas fa-arrow-up"></i>
            </button>
        </ContextProvider<SiteSettings>>
    }
}

pub fn run() {
    let mount = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");
    let settings = SiteSettings::from_mount(&mount);

    let content = match SiteContent::bundled() {
        Ok(content) => content,
        Err(error) => {
            log_event(
                &settings,
                LogLevel::Info,
                "content_invalid",
                json!({ "error": error.to_string() }),
            );
            return;
        }
    };

    yew::Renderer::<App>::with_root_and_props(
        mount,
        AppProps {
            settings,
            content: Rc::new(content),
        },
    )
    .render();
}
