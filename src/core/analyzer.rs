use crate::core::stats::PriceSample;
use crate::domain::model::{CarrierSummary, MedianMode, Report, Route, Ticket};
use std::collections::BTreeMap;

/// carrier → 該航空公司符合航線的票
pub type CarrierGroups<'a> = BTreeMap<&'a str, Vec<&'a Ticket>>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisOptions {
    pub route: Route,
    pub median_mode: MedianMode,
}

#[derive(Debug, Clone, Default)]
pub struct TicketAnalyzer {
    options: AnalysisOptions,
}

impl TicketAnalyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    pub fn route(&self) -> &Route {
        &self.options.route
    }

    /// 一次掃描同時完成航線過濾、分組與票價收集
    pub fn group<'a>(&self, tickets: &'a [Ticket]) -> (CarrierGroups<'a>, PriceSample) {
        let mut groups = CarrierGroups::new();
        let mut prices = PriceSample::new();

        for ticket in tickets.iter().filter(|t| self.options.route.matches(t)) {
            groups.entry(ticket.carrier.as_str()).or_default().push(ticket);
            prices.push(ticket.price);
        }

        (groups, prices)
    }

    pub fn analyze(&self, tickets: &[Ticket]) -> Report {
        let (groups, prices) = self.group(tickets);

        let carriers: Vec<CarrierSummary> = groups
            .iter()
            .filter_map(|(carrier, members)| {
                let min = members.iter().map(|t| t.flight_duration_minutes).min()?;
                Some(CarrierSummary {
                    carrier: carrier.to_string(),
                    min_flight_minutes: min,
                    ticket_count: members.len(),
                })
            })
            .collect();

        let matched_tickets = prices.len();
        tracing::debug!(
            "Route {}: {} of {} tickets matched across {} carriers",
            self.options.route,
            matched_tickets,
            tickets.len(),
            carriers.len()
        );

        Report {
            route: self.options.route.clone(),
            carriers,
            prices: prices.stats(self.options.median_mode),
            total_records: tickets.len(),
            matched_tickets,
            skipped_records: 0,
        }
    }
}
