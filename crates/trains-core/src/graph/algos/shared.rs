use crate::graph::route::{Connection, Route};
use crate::graph::traversal::RouteProvider;

/// A pending expansion: a town reached with some accumulated walk state
#[derive(Debug, Clone, Copy)]
struct Frame<'a, S> {
    town: &'a str,
    state: S,
}

/// Depth-first exploration of every walk starting at `origin`.
///
/// For each popped frame, `step` is called once per outbound route (in
/// insertion order) with the frame's state. Returning `Some(next)` continues
/// the walk along that route; `None` prunes it. Walks may revisit towns, so
/// `step` alone is responsible for termination.
///
/// Returns the number of frames expanded.
pub fn explore<'a, S, F>(
    provider: &'a dyn RouteProvider,
    origin: &'a str,
    initial: S,
    mut step: F,
) -> usize
where
    S: Copy,
    F: FnMut(&'a Route, S) -> Option<S>,
{
    let mut stack = vec![Frame {
        town: origin,
        state: initial,
    }];
    let mut expanded = 0usize;

    while let Some(frame) = stack.pop() {
        expanded += 1;

        for route in provider.outbound_routes(frame.town) {
            if let Some(next) = step(route, frame.state) {
                stack.push(Frame {
                    town: route.destination(),
                    state: next,
                });
            }
        }
    }

    expanded
}
