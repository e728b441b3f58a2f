use leptos::ev;
use leptos::prelude::*;

use crate::tab::Tab;
use crate::types::{ActiveStyles, SelectEvent, TabSet};
use crate::use_tabs::{use_tabs, UseTabs};
use crate::utils::clean_object;

/// Tabbed navigation container: a row of selectable headers plus the content
/// pane of the active tab.
///
/// The active index is stored verbatim on every header click, without bounds
/// or disabled gating; an out-of-range index simply renders an empty content
/// pane. `on_select` fires on every click, disabled headers included, after
/// the state update and before the content re-render is observable.
#[component]
pub fn Tabs(
    /// Tab descriptors; wrap in a fresh `TabSet` whenever the collection
    /// itself changes, so the initial selection is re-derived
    #[prop(into)]
    tabs: Signal<TabSet>,
    /// Additional CSS classes for the content pane
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Inline CSS for the content pane
    #[prop(optional, into)]
    style: MaybeProp<String>,
    /// Container-level active override, used by descriptors without their own
    #[prop(optional)]
    active_styles: Option<ActiveStyles>,
    /// Selection event handler
    #[prop(optional)]
    on_select: Option<Callback<SelectEvent>>,
) -> impl IntoView {
    let UseTabs {
        child_tabs,
        active_tab,
        on_tab_active,
    } = use_tabs(tabs);

    let container_styles = active_styles.unwrap_or_default();

    let headers = move || {
        let active = active_tab.get();
        child_tabs
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, descriptor)| {
                let effective_styles = descriptor
                    .active_styles
                    .clone()
                    .unwrap_or_else(|| container_styles.clone());
                let element = descriptor.snapshot(&effective_styles);
                let is_active = index == active;
                let on_click = Callback::new(move |_: ev::MouseEvent| {
                    on_tab_active.run(index);
                    if let Some(handler) = on_select {
                        handler.run(SelectEvent {
                            index,
                            element: clean_object(&element),
                        });
                    }
                });
                view! {
                    <Tab
                        title=descriptor.title.clone()
                        icon=descriptor.icon.clone()
                        right_icon=descriptor.right_icon
                        active=is_active
                        disabled=descriptor.disabled
                        hide_tab=descriptor.hide_tab
                        style=descriptor.style.clone()
                        class_name=descriptor.class_name.clone()
                        test_id=descriptor.test_id.clone()
                        active_styles=effective_styles
                        on_click=on_click
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div class="rc-tabs">
            <div class="rc-tabs_tab_ctn">{headers}</div>
            <div
                class=move || format!("{} rc-tabs_ctn", class.get().unwrap_or_default())
                style=move || style.get().unwrap_or_default()
            >
                {move || {
                    child_tabs
                        .get()
                        .get(active_tab.get())
                        .and_then(|descriptor| descriptor.content.clone())
                        .map(|content| content.run())
                }}
            </div>
        </div>
    }
}
