//! Selecting services which share a group.
//!
//! A lookup returns every service below a key, shallowest first. When the
//! services at the shallowest depth agree on a [`Service::group`], only the
//! services in that group (or in no group at all) should be answered.

use crate::Service;

/// Scan state while walking the services in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection<'s> {
    /// At the top depth, no group seen yet.
    Ungrouped,

    /// At the top depth, every grouped service so far agreed on this group.
    Grouped(&'s str),

    /// Past the top depth: services before `boundary` are kept, and
    /// services from there on are kept when they match `group`.
    Filtering { group: &'s str, boundary: usize },
}

/// Outcome of feeding one service to a [`Selection`].
enum Step<'s> {
    Continue(Selection<'s>),
    /// Grouping does not apply to these services.
    Abandon,
}

impl<'s> Selection<'s> {
    fn step(self, index: usize, service: &'s Service, top: usize) -> Step<'s> {
        match self {
            Selection::Filtering { .. } => Step::Continue(self),
            _ if depth(&service.key) != top => match self {
                Selection::Grouped(group) => Step::Continue(Selection::Filtering {
                    group,
                    boundary: index,
                }),
                _ => Step::Abandon,
            },
            _ => match (self, service.group.as_str()) {
                (_, "") => Step::Continue(self),
                (Selection::Grouped(group), other) if group != other => {
                    tracing::debug!(
                        key = %service.key,
                        %group,
                        %other,
                        "conflicting groups at the same depth, not grouping"
                    );
                    Step::Abandon
                }
                (_, group) => Step::Continue(Selection::Grouped(group)),
            },
        }
    }
}

fn depth(key: &str) -> usize {
    key.matches('/').count()
}

/// Group and boundary to filter by, or `None` when grouping does not apply.
fn select(services: &[Service]) -> Option<(&str, usize)> {
    let top = depth(&services.first()?.key);

    let mut selection = Selection::Ungrouped;
    for (index, service) in services.iter().enumerate() {
        selection = match selection.step(index, service, top) {
            Step::Continue(selection) => selection,
            Step::Abandon => return None,
        };
    }

    match selection {
        Selection::Filtering { group, boundary } => Some((group, boundary)),
        _ => None,
    }
}

/// Group `services` by the group of their shallowest members.
///
/// `services` must be ordered so that services at the same depth (number of
/// `/` in [`Service::key`]) are contiguous, starting with the shallowest.
///
/// When every grouped service at the first depth names the same group, the
/// result holds all services at that depth, followed by the deeper services
/// that are either ungrouped or in that group. Otherwise (no group at the
/// first depth, conflicting groups, or no deeper services at all) the
/// services are returned unchanged.
pub fn group(services: Vec<Service>) -> Vec<Service> {
    let Some((group, boundary)) = select(&services).map(|(g, b)| (g.to_owned(), b)) else {
        return services;
    };

    let n = services.len();
    let selected: Vec<Service> = services
        .into_iter()
        .enumerate()
        .filter(|(index, service)| {
            *index < boundary || service.group.is_empty() || service.group == group
        })
        .map(|(_, service)| service)
        .collect();

    tracing::trace!(%group, kept = selected.len(), of = n, "grouped services");
    selected
}
