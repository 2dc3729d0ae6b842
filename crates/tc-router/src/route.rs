//! Domain-level routing result.

/// One action of a journey.  Names borrow from the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteStep<'a> {
    /// Wait at `stop_name` for the next bus.
    Wait { stop_name: &'a str, time: f64 },
    /// Ride `bus_name` for `span_count` stops without leaving the bus.
    Ride { bus_name: &'a str, span_count: u32, time: f64 },
}

impl RouteStep<'_> {
    /// Duration of the step in seconds.
    pub fn time(&self) -> f64 {
        match self {
            RouteStep::Wait { time, .. } | RouteStep::Ride { time, .. } => *time,
        }
    }
}

/// A shortest-time journey between two stops.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteResult<'a> {
    /// Sum of all step durations, in seconds.
    pub total_time: f64,
    /// Steps in travel order.
    pub steps: Vec<RouteStep<'a>>,
}

impl<'a> RouteResult<'a> {
    /// Append a step and add its duration to the total.
    pub fn push(&mut self, step: RouteStep<'a>) {
        self.total_time += step.time();
        self.steps.push(step);
    }

    /// Number of buses boarded.
    pub fn ride_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, RouteStep::Ride { .. }))
            .count()
    }
}
