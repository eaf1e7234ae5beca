//! Listing filters.
//!
//! Every predicate is optional and an absent predicate always matches. The
//! provider's own filtering is never trusted, so all predicates are checked
//! locally over the full listing.

use std::collections::HashMap;

use crate::model::{Container, ContainerState, Image, ImageFilter, PodSandbox, PodSandboxState};
use crate::reference::with_default_tag;

/// Multi-field filter over sandboxes or containers.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter<S> {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Owning sandbox; only containers can match a set value.
    pub pod_id: Option<String>,
    pub state: Option<S>,
    /// Every pair must be present on the item; extra item labels are ignored.
    pub label_selector: HashMap<String, String>,
}

impl<S> Default for Filter<S> {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            pod_id: None,
            state: None,
            label_selector: HashMap::new(),
        }
    }
}

/// Something a [`Filter`] can be evaluated against.
pub trait Filterable {
    type State: PartialEq;

    fn filter_id(&self) -> &str;
    fn filter_name(&self) -> &str;
    /// Owning sandbox id, `None` for items that have no owner.
    fn filter_pod_id(&self) -> Option<&str>;
    fn filter_state(&self) -> Self::State;
    fn filter_labels(&self) -> &HashMap<String, String>;
}

impl<S: PartialEq> Filter<S> {
    /// True if every present predicate matches.
    pub fn matches<T: Filterable<State = S>>(&self, item: &T) -> bool {
        self.matches_identity(item.filter_id(), item.filter_name(), item.filter_pod_id())
            && self
                .state
                .as_ref()
                .map_or(true, |state| *state == item.filter_state())
            && labels_match(&self.label_selector, item.filter_labels())
    }

    /// Check only id, name and owning sandbox.
    ///
    /// Used to skip items before an expensive per-item lookup.
    pub fn matches_identity(&self, id: &str, name: &str, pod_id: Option<&str>) -> bool {
        if self.id.as_deref().is_some_and(|want| want != id) {
            return false;
        }
        if self.name.as_deref().is_some_and(|want| want != name) {
            return false;
        }
        if let Some(want) = self.pod_id.as_deref() {
            if pod_id != Some(want) {
                return false;
            }
        }
        true
    }
}

/// Subset containment of `selector` in `labels`.
pub fn labels_match(selector: &HashMap<String, String>, labels: &HashMap<String, String>) -> bool {
    selector
        .iter()
        .all(|(key, value)| labels.get(key) == Some(value))
}

/// Keep the items the filter matches; no filter keeps everything.
pub fn apply<T, S>(filter: Option<&Filter<S>>, items: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Filterable<State = S>,
    S: PartialEq,
{
    items
        .into_iter()
        .filter(|item| filter.map_or(true, |f| f.matches(item)))
        .collect()
}

impl ImageFilter {
    /// Exact membership of the (tag-defaulted) reference in the repo tags.
    pub fn matches(&self, image: &Image) -> bool {
        let Some(reference) = self.image.as_deref() else {
            return true;
        };
        let wanted = with_default_tag(reference);
        image.repo_tags.iter().any(|tag| *tag == wanted)
    }
}

impl Filterable for PodSandbox {
    type State = PodSandboxState;

    fn filter_id(&self) -> &str {
        &self.id
    }

    fn filter_name(&self) -> &str {
        &self.name
    }

    fn filter_pod_id(&self) -> Option<&str> {
        None
    }

    fn filter_state(&self) -> PodSandboxState {
        self.state
    }

    fn filter_labels(&self) -> &HashMap<String, String> {
        &self.labels
    }
}

impl Filterable for Container {
    type State = ContainerState;

    fn filter_id(&self) -> &str {
        &self.id
    }

    fn filter_name(&self) -> &str {
        &self.name
    }

    fn filter_pod_id(&self) -> Option<&str> {
        Some(&self.pod_sandbox_id)
    }

    fn filter_state(&self) -> ContainerState {
        self.state
    }

    fn filter_labels(&self) -> &HashMap<String, String> {
        &self.labels
    }
}
