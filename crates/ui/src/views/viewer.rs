use dioxus::prelude::*;
use stories_core::playback::ViewerIntent;

use crate::vm::ViewerVm;

/// Full-screen overlay: progress segments, current image and navigation.
#[component]
pub fn StoryViewer(vm: Signal<ViewerVm>, on_intent: EventHandler<ViewerIntent>) -> Element {
    let frame = vm.read().frame();
    if !frame.open {
        return rsx! {};
    }

    let image_class = if frame.loading {
        "story-image story-image--loading"
    } else {
        "story-image"
    };

    rsx! {
        div { class: "story-viewer", role: "dialog", aria_modal: "true",
            div { class: "story-progress-bar",
                for (index, fill) in frame.segments.iter().copied().enumerate() {
                    div { key: "{index}", class: "story-progress-segment",
                        div { class: "story-progress-segment-inner", style: "width: {fill}%;" }
                    }
                }
            }
            header { class: "story-viewer__header",
                if let Some(name) = frame.user_name.as_deref() {
                    p { class: "story-viewer__user", "{name}" }
                }
                button {
                    class: "close-story-viewer",
                    r#type: "button",
                    aria_label: "Close",
                    onclick: move |_| on_intent.call(ViewerIntent::Close),
                    "×"
                }
            }
            div { class: "story-viewer__stage",
                div {
                    class: "story-nav prev",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_intent.call(ViewerIntent::Previous);
                    },
                }
                for media in frame.media {
                    img {
                        key: "{media.ticket.value()}",
                        id: "story-image",
                        class: image_class,
                        src: "{media.src}",
                        alt: "{media.alt}",
                        onload: move |_| {
                            let mut vm = vm;
                            vm.write().media_loaded(media.ticket);
                        },
                        onerror: move |_| {
                            let mut vm = vm;
                            vm.write().media_failed(media.ticket, "image failed to load");
                        },
                    }
                }
                div {
                    class: "story-nav next",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_intent.call(ViewerIntent::Next);
                    },
                }
            }
        }
    }
}
