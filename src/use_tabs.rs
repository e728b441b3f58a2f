use leptos::prelude::*;

use crate::types::{TabDescriptor, TabNode, TabSet};

/// Selection state shared between the `Tabs` container and its headers.
pub struct UseTabs {
    /// Flattened, order-preserving list of valid descriptors (hidden ones
    /// included, so indices stay stable)
    pub child_tabs: Signal<Vec<TabDescriptor>>,
    /// Position of the active tab within `child_tabs`. Stored verbatim, may
    /// be out of range; rendering resolves validity lazily.
    pub active_tab: Signal<usize>,
    /// Stores the given index unconditionally
    pub on_tab_active: Callback<usize>,
}

/// Flattens the host-supplied children into the valid descriptor list.
/// Non-descriptor nodes (plain text, numbers, booleans, empty slots) are
/// silently dropped at any nesting depth.
pub fn normalize(children: &TabSet) -> Vec<TabDescriptor> {
    let mut tabs = Vec::new();
    collect(children.node(), &mut tabs);
    tabs
}

fn collect(node: &TabNode, out: &mut Vec<TabDescriptor>) {
    match node {
        TabNode::Tab(descriptor) => out.push(descriptor.clone()),
        TabNode::Group(nodes) => {
            for node in nodes {
                collect(node, out);
            }
        }
        TabNode::Text(_) | TabNode::Number(_) | TabNode::Bool(_) | TabNode::Empty => {}
    }
}

/// First descriptor flagged `active` wins; 0 when none is flagged or the
/// list is empty.
pub fn initial_active_index(tabs: &[TabDescriptor]) -> usize {
    tabs.iter().position(|tab| tab.active).unwrap_or(0)
}

/// Owns the active-index state for one `Tabs` instance.
///
/// The initial selection is derived eagerly from the set supplied at hook
/// creation. Afterwards the `TabSet` generation is compared on every read of
/// `active_tab`: the selection is re-derived only when the host hands over a
/// new set, so re-reading an unchanged one never resets a user-navigated
/// selection.
pub fn use_tabs(children: Signal<TabSet>) -> UseTabs {
    let initial_set = children.get_untracked();
    let selected = RwSignal::new(initial_active_index(&normalize(&initial_set)));
    let seen_generation = RwSignal::new(initial_set.generation());

    let child_tabs = Signal::derive(move || normalize(&children.get()));

    let active_tab = Signal::derive(move || {
        let set = children.get();
        let generation = set.generation();
        if seen_generation.get_untracked() != generation {
            seen_generation.update_untracked(|seen| *seen = generation);
            let tabs = normalize(&set);
            if !tabs.is_empty() {
                let initial = initial_active_index(&tabs);
                if selected.get_untracked() != initial {
                    log::debug!("tab set changed, active tab reset to {initial}");
                    selected.update_untracked(|current| *current = initial);
                }
            }
        }
        selected.get()
    });

    let on_tab_active = Callback::new(move |index: usize| selected.set(index));

    UseTabs {
        child_tabs,
        active_tab,
        on_tab_active,
    }
}
