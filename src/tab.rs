use leptos::ev;
use leptos::prelude::*;

use crate::types::{ActiveStyles, TabLabel};
use crate::utils::merge_styles;

/// Automation identifier used when the host supplies none
pub const DEFAULT_TEST_ID: &str = "testid";

/// A single tab header. Stateless: everything it shows is derived from its
/// props. Renders nothing when `hide_tab` is set.
///
/// A click always raises `on_click`, disabled headers included; `disabled`
/// is reflected as the `data-disabled` attribute only. Both `aria-selected`
/// and `data-disabled` are always present, "true" or "false".
#[component]
pub fn Tab(
    /// Header label
    #[prop(into)]
    title: TabLabel,
    /// Optional icon rendered next to the label
    #[prop(optional_no_strip)]
    icon: Option<ViewFn>,
    /// Places the icon after the label
    #[prop(optional)]
    right_icon: bool,
    /// Whether this header is the active one
    #[prop(optional)]
    active: bool,
    /// Disabled state (visual/semantic only)
    #[prop(optional)]
    disabled: bool,
    /// Skips rendering entirely
    #[prop(optional)]
    hide_tab: bool,
    /// Inline CSS for the header
    #[prop(optional, into)]
    style: String,
    /// Additional CSS classes
    #[prop(optional, into)]
    class_name: String,
    /// Automation identifier, used for `tab-{id}` and `panel-{id}`
    #[prop(optional_no_strip)]
    test_id: Option<String>,
    /// Style/class override applied while active
    #[prop(optional)]
    active_styles: Option<ActiveStyles>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<ev::MouseEvent>>,
) -> impl IntoView {
    if hide_tab {
        return ().into_any();
    }

    let test_id = test_id.unwrap_or_else(|| DEFAULT_TEST_ID.to_string());
    let active_styles = active_styles.unwrap_or_default();

    // Active headers swap their base class for the active pair; the base
    // inline style stays and the override is appended after it.
    let merged_style = if active {
        merge_styles(&style, &active_styles.style)
    } else {
        style
    };
    let merged_class = if active {
        format!("rc-tab_active {}", active_styles.class_name)
    } else {
        class_name
    };

    let label = match icon {
        Some(icon) => {
            let icon_class = if right_icon {
                "rc-tab_icon rc-tab_icon_right"
            } else {
                "rc-tab_icon"
            };
            view! {
                <div class=icon_class>
                    {icon.run()} " " <span>{title.render()}</span>
                </div>
            }
            .into_any()
        }
        None => title.render(),
    };

    let aria_selected = if active { "true" } else { "false" };
    let data_disabled = if disabled { "true" } else { "false" };

    view! {
        <div
            role="tab"
            style=merged_style
            aria-selected=aria_selected
            data-testid=format!("tab-{}", test_id)
            data-disabled=data_disabled
            aria-controls=format!("panel-{}", test_id)
            class=format!("rc-tab {}", merged_class)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {label}
        </div>
    }
    .into_any()
}
