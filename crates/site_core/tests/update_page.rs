use std::sync::Once;
use std::time::Duration;

use pretty_assertions::assert_eq;
use site_core::{
    update, Effect, FilterButton, Key, LazyImageLayout, Msg, ObservedTarget, PageLayout,
    Placement, ProjectCard, Rect, ResumeFile, SiteState, StatGroupLayout, Timer, TILT_RESET,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(site_logging::initialize_for_tests);
}

fn placement(id: &str, top: f64) -> Placement {
    Placement {
        id: id.to_string(),
        top,
    }
}

fn layout() -> PageLayout {
    PageLayout {
        viewport_height: 900.0,
        nav_height: 80.0,
        hero_height: Some(700.0),
        sections: vec![
            placement("home", 0.0),
            placement("services", 900.0),
            placement("careers", 1800.0),
        ],
        anchors: vec![placement("job-env", 2100.0)],
        reveal_targets: vec![placement("intro", 400.0), placement("footer", 2600.0)],
        lazy_images: vec![LazyImageLayout {
            id: "team".to_string(),
            data_src: "img/team.jpg".to_string(),
        }],
        stat_groups: vec![StatGroupLayout {
            id: "stats".to_string(),
            counters: vec![
                ("projects".to_string(), "500+".to_string()),
                ("hours".to_string(), "2K+".to_string()),
                ("note".to_string(), "ISO".to_string()),
            ],
        }],
        filter_buttons: vec![
            FilterButton {
                id: "all-btn".to_string(),
                filter: "all".to_string(),
            },
            FilterButton {
                id: "water-btn".to_string(),
                filter: "water".to_string(),
            },
        ],
        project_cards: vec![
            ProjectCard {
                id: "p1".to_string(),
                category: "water".to_string(),
            },
            ProjectCard {
                id: "p2".to_string(),
                category: "air".to_string(),
            },
        ],
        dropdowns: vec!["services-menu".to_string()],
        location_hash: None,
    }
}

fn loaded() -> SiteState {
    update(SiteState::new(), Msg::PageLoaded(layout())).0
}

fn send(state: SiteState, msg: Msg) -> SiteState {
    update(state, msg).0
}

fn counter_text(state: &SiteState, element: &str) -> String {
    state
        .view()
        .counters
        .into_iter()
        .find(|counter| counter.element == element)
        .map(|counter| counter.text)
        .unwrap_or_default()
}

#[test]
fn page_load_schedules_reveal_and_body_class() {
    init_logging();
    let (state, effects) = update(SiteState::new(), Msg::PageLoaded(layout()));
    assert_eq!(
        effects,
        vec![
            Effect::StartTimer {
                timer: Timer::InitialReveal,
                after: Duration::from_millis(100),
            },
            Effect::StartTimer {
                timer: Timer::BodyLoaded,
                after: Duration::from_millis(100),
            },
        ]
    );
    assert!(!state.view().body_loaded);
    assert_eq!(state.view().nav.active_section.as_deref(), Some("home"));

    let state = send(state, Msg::TimerFired(Timer::InitialReveal));
    let state = send(state, Msg::TimerFired(Timer::BodyLoaded));
    let view = state.view();
    assert_eq!(view.revealed, vec!["intro".to_string()]);
    assert!(view.body_loaded);
}

#[test]
fn reveal_needs_enough_visibility_and_is_permanent() {
    init_logging();
    let state = send(
        loaded(),
        Msg::ViewportEntered {
            target: ObservedTarget::Reveal("footer".to_string()),
            ratio: 0.05,
        },
    );
    assert!(state.view().revealed.is_empty());

    let state = send(
        state,
        Msg::ViewportEntered {
            target: ObservedTarget::Reveal("footer".to_string()),
            ratio: 0.1,
        },
    );
    let state = send(state, Msg::Scrolled { y: 0.0 });
    assert_eq!(state.view().revealed, vec!["footer".to_string()]);
}

#[test]
fn lazy_image_loads_once_and_is_unobserved() {
    init_logging();
    let target = ObservedTarget::LazyImage("team".to_string());
    let (state, effects) = update(
        loaded(),
        Msg::ViewportEntered {
            target: target.clone(),
            ratio: 0.01,
        },
    );
    assert_eq!(effects, vec![Effect::Unobserve(target.clone())]);
    assert_eq!(state.view().loaded_images[0].src, "img/team.jpg");

    let (_state, effects) = update(state, Msg::ViewportEntered { target, ratio: 1.0 });
    assert!(effects.is_empty());
}

#[test]
fn stat_counters_run_once_to_exact_final_text() {
    init_logging();
    let group = ObservedTarget::StatGroup("stats".to_string());

    // Below the half-visible threshold nothing happens.
    let (state, effects) = update(
        loaded(),
        Msg::ViewportEntered {
            target: group.clone(),
            ratio: 0.4,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(counter_text(&state, "projects"), "500+");

    let (mut state, effects) = update(
        state,
        Msg::ViewportEntered {
            target: group.clone(),
            ratio: 0.5,
        },
    );
    assert_eq!(
        effects,
        vec![
            Effect::StartTimer {
                timer: Timer::CounterStart {
                    group: "stats".to_string(),
                    index: 0,
                },
                after: Duration::from_millis(200),
            },
            Effect::StartTimer {
                timer: Timer::CounterStart {
                    group: "stats".to_string(),
                    index: 1,
                },
                after: Duration::from_millis(300),
            },
            Effect::Unobserve(group.clone()),
        ]
    );
    assert_eq!(counter_text(&state, "projects"), "0+");
    assert_eq!(counter_text(&state, "hours"), "0+");
    assert_eq!(counter_text(&state, "note"), "ISO");

    for index in 0..2 {
        let (next, effects) = update(
            state,
            Msg::TimerFired(Timer::CounterStart {
                group: "stats".to_string(),
                index,
            }),
        );
        state = next;
        assert!(effects.len() <= 1);
    }

    let mut frames = 0;
    loop {
        let (next, effects) = update(state, Msg::AnimationFrame);
        state = next;
        frames += 1;
        if effects.is_empty() {
            break;
        }
        assert_eq!(effects, vec![Effect::RequestAnimationFrame]);
        assert!(frames < 1_000, "animation never finished");
    }
    assert_eq!(counter_text(&state, "projects"), "500+");
    assert_eq!(counter_text(&state, "hours"), "2K+");

    // Re-entering the viewport leaves the finished values alone.
    let (state, effects) = update(state, Msg::ViewportEntered { target: group, ratio: 1.0 });
    assert!(effects.is_empty());
    assert_eq!(counter_text(&state, "projects"), "500+");
}

#[test]
fn scrolling_updates_header_active_link_and_parallax() {
    init_logging();
    let (state, effects) = update(loaded(), Msg::Scrolled { y: 350.0 });
    assert_eq!(
        effects,
        vec![Effect::StartTimer {
            timer: Timer::Parallax,
            after: Duration::from_millis(5),
        }]
    );
    let view = state.view();
    assert!(view.nav.scrolled);
    assert!(!view.nav.back_to_top_visible);
    assert_eq!(view.nav.active_section.as_deref(), Some("home"));

    let state = send(state, Msg::TimerFired(Timer::Parallax));
    let parallax = state.view().nav.parallax.expect("parallax applied");
    assert_eq!(parallax.content_offset, 175.0);
    assert_eq!(parallax.content_opacity, 0.5);

    let state = send(state, Msg::Scrolled { y: 1_700.0 });
    let view = state.view();
    assert!(view.nav.back_to_top_visible);
    assert_eq!(view.nav.active_section.as_deref(), Some("careers"));
}

#[test]
fn anchor_click_scrolls_under_header_and_closes_menu() {
    init_logging();
    let state = send(loaded(), Msg::MobileMenuToggled);
    assert!(state.view().nav.menu_open);

    let (state, effects) = update(
        state,
        Msg::AnchorClicked {
            href: "#services".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::ScrollTo {
            top: 820.0,
            smooth: true,
        }]
    );
    assert!(!state.view().nav.menu_open);

    let (state, effects) = update(
        state,
        Msg::AnchorClicked {
            href: "#".to_string(),
        },
    );
    assert!(effects.is_empty());

    let (_state, effects) = update(state, Msg::BackToTopClicked);
    assert_eq!(
        effects,
        vec![Effect::ScrollTo {
            top: 0.0,
            smooth: true,
        }]
    );
}

#[test]
fn deep_link_scrolls_and_highlights_briefly() {
    init_logging();
    let layout = PageLayout {
        location_hash: Some("#job-env".to_string()),
        ..layout()
    };
    let (state, effects) = update(SiteState::new(), Msg::PageLoaded(layout));
    assert!(effects.contains(&Effect::StartTimer {
        timer: Timer::DeepLinkScroll,
        after: Duration::from_millis(100),
    }));

    let (state, effects) = update(state, Msg::TimerFired(Timer::DeepLinkScroll));
    assert_eq!(
        effects,
        vec![
            Effect::ScrollTo {
                top: 2000.0,
                smooth: true,
            },
            Effect::StartTimer {
                timer: Timer::DeepLinkHighlightEnd,
                after: Duration::from_millis(2000),
            },
        ]
    );
    assert_eq!(state.view().highlighted.as_deref(), Some("job-env"));

    let state = send(state, Msg::TimerFired(Timer::DeepLinkHighlightEnd));
    assert_eq!(state.view().highlighted, None);
}

#[test]
fn unknown_hash_is_ignored() {
    init_logging();
    let layout = PageLayout {
        location_hash: Some("#nowhere".to_string()),
        ..layout()
    };
    let (_state, effects) = update(SiteState::new(), Msg::PageLoaded(layout));
    assert_eq!(effects.len(), 2);
}

#[test]
fn filter_fades_cards_out_and_back_in() {
    init_logging();
    let (state, effects) = update(
        loaded(),
        Msg::FilterSelected {
            button: "water-btn".to_string(),
            filter: "water".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::StartTimer {
            timer: Timer::FilterSettle("p2".to_string()),
            after: Duration::from_millis(300),
        }]
    );
    let view = state.view();
    assert_eq!(view.filter.active_button.as_deref(), Some("water-btn"));
    assert!(view.filter.cards[1].displayed);
    assert!(!view.filter.cards[1].opaque);

    let state = send(state, Msg::TimerFired(Timer::FilterSettle("p2".to_string())));
    assert!(!state.view().filter.cards[1].displayed);

    let (state, effects) = update(
        state,
        Msg::FilterSelected {
            button: "all-btn".to_string(),
            filter: "all".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::StartTimer {
            timer: Timer::FilterSettle("p2".to_string()),
            after: Duration::from_millis(10),
        }]
    );
    let state = send(state, Msg::TimerFired(Timer::FilterSettle("p2".to_string())));
    let card = &state.view().filter.cards[1];
    assert!(card.displayed && card.opaque);
}

#[test]
fn card_tilt_follows_pointer_and_resets() {
    init_logging();
    let rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 200.0,
        height: 200.0,
    };
    let state = send(
        loaded(),
        Msg::CardPointerMoved {
            card: "p1".to_string(),
            rect,
            x: 100.0,
            y: 100.0,
        },
    );
    assert_eq!(
        state.view().tilts,
        vec![(
            "p1".to_string(),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) translateY(-10px)".to_string()
        )]
    );

    let state = send(
        state,
        Msg::CardPointerLeft {
            card: "p1".to_string(),
        },
    );
    assert_eq!(state.view().tilts[0].1, TILT_RESET);
}

#[test]
fn keyboard_focus_mode_and_dropdowns() {
    init_logging();
    let state = send(loaded(), Msg::KeyPressed(Key::Tab));
    assert!(state.view().user_is_tabbing);
    let state = send(state, Msg::PointerDown);
    assert!(!state.view().user_is_tabbing);

    let state = send(
        state,
        Msg::DropdownKeyPressed {
            dropdown: "services-menu".to_string(),
            key: Key::Enter,
        },
    );
    assert!(state.view().dropdowns[0].visible);
    let state = send(
        state,
        Msg::DropdownKeyPressed {
            dropdown: "services-menu".to_string(),
            key: Key::Other,
        },
    );
    assert!(state.view().dropdowns[0].visible);
    let state = send(
        state,
        Msg::DropdownKeyPressed {
            dropdown: "services-menu".to_string(),
            key: Key::Space,
        },
    );
    assert!(!state.view().dropdowns[0].visible);
}

#[test]
fn print_mode_toggles() {
    init_logging();
    let state = send(loaded(), Msg::PrintStarted);
    assert!(state.view().printing);
    let state = send(state, Msg::PrintFinished);
    assert!(!state.view().printing);
}

fn file(name: &str, size_bytes: u64, mime_type: &str) -> ResumeFile {
    ResumeFile {
        name: name.to_string(),
        size_bytes,
        mime_type: mime_type.to_string(),
    }
}

#[test]
fn oversized_resume_is_rejected_before_type() {
    init_logging();
    let state = send(
        SiteState::new(),
        Msg::ResumeSelected(Some(file("photo.png", 6 * 1024 * 1024, "image/png"))),
    );
    let view = state.view();
    assert_eq!(view.resume.file_name, None);
    assert_eq!(
        view.notification.unwrap().message,
        "File size must be less than 5MB"
    );
}

#[test]
fn rejected_resume_clears_earlier_selection() {
    init_logging();
    let state = send(
        SiteState::new(),
        Msg::ResumeSelected(Some(file("cv.pdf", 2048, "application/pdf"))),
    );
    assert!(state.upload().has_file());

    let state = send(
        state,
        Msg::ResumeSelected(Some(file("cv.pdf", 6 * 1024 * 1024, "application/pdf"))),
    );
    assert_eq!(state.upload().file_name(), None);
    assert!(!state.upload().has_file());
    assert_eq!(state.view().resume.file_name, None);
}

#[test]
fn dropped_file_of_wrong_type_is_rejected() {
    init_logging();
    let state = send(SiteState::new(), Msg::ResumeDragEntered);
    let state = send(
        state,
        Msg::ResumeDropped(vec![file("notes.txt", 10, "text/plain")]),
    );
    let view = state.view();
    assert!(!view.resume.highlighted);
    assert_eq!(view.resume.file_name, None);
    assert!(!state.upload().has_file());
    assert_eq!(
        view.notification.unwrap().message,
        "Please upload a PDF, DOC, or DOCX file"
    );
}

#[test]
fn second_notification_replaces_first() {
    init_logging();
    let (state, effects) = update(
        SiteState::new(),
        Msg::ResumeSelected(Some(file("big.pdf", 6 * 1024 * 1024, "application/pdf"))),
    );
    assert_eq!(
        effects,
        vec![Effect::StartTimer {
            timer: Timer::NotificationExit(1),
            after: Duration::from_millis(5000),
        }]
    );

    let (state, effects) = update(
        state,
        Msg::ResumeSelected(Some(file("notes.txt", 10, "text/plain"))),
    );
    assert_eq!(
        effects,
        vec![
            Effect::CancelTimer {
                timer: Timer::NotificationExit(1),
            },
            Effect::CancelTimer {
                timer: Timer::NotificationRemove(1),
            },
            Effect::StartTimer {
                timer: Timer::NotificationExit(2),
                after: Duration::from_millis(5000),
            },
        ]
    );
    let notification = state.view().notification.unwrap();
    assert_eq!(notification.id, 2);
    assert_eq!(notification.message, "Please upload a PDF, DOC, or DOCX file");

    let (state, effects) = update(state, Msg::TimerFired(Timer::NotificationExit(2)));
    assert_eq!(
        effects,
        vec![Effect::StartTimer {
            timer: Timer::NotificationRemove(2),
            after: Duration::from_millis(400),
        }]
    );
    assert!(state.view().notification.unwrap().leaving);

    let state = send(state, Msg::TimerFired(Timer::NotificationRemove(2)));
    assert_eq!(state.view().notification, None);
}

#[test]
fn dropped_files_use_the_first_and_clear_highlight() {
    init_logging();
    let state = send(SiteState::new(), Msg::ResumeDragEntered);
    assert!(state.view().resume.highlighted);
    let state = send(state, Msg::ResumeDragLeft);
    assert!(!state.view().resume.highlighted);

    let state = send(state, Msg::ResumeDragEntered);
    let state = send(
        state,
        Msg::ResumeDropped(vec![
            file(
                "cv.docx",
                2048,
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ),
            file("cv.pdf", 2048, "application/pdf"),
        ]),
    );
    let view = state.view();
    assert!(!view.resume.highlighted);
    assert_eq!(view.resume.file_name.as_deref(), Some("cv.docx"));
    assert_eq!(view.notification, None);
}
