//! Scroll-timeline records
//!
//! The scroll timeline walks a single date-ordered series in which each
//! point carries whatever happened on that date: a tariff action, a PMI
//! reading, port volumes, narrative events. [`merge_timeline`] builds that
//! series from the individual datasets, keyed by date.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::pmi::PmiReading;
use crate::ports::ContainerVolume;
use crate::tariff::TariffAction;

/// A dated narrative event shown alongside the charts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub date: NaiveDate,
    pub headline: String,
    pub body: String,
}

/// Everything known for one date on the timeline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub date: NaiveDate,

    /// Tariff action effective on this date, if any
    pub tariff: Option<TariffAction>,

    /// PMI value for this date, if any
    pub pmi: Option<f64>,

    /// Port volumes reported for this date (one entry per port)
    pub container_volumes: Vec<ContainerVolume>,

    /// Narrative events on this date
    pub events: Vec<TimelineEvent>,
}

impl TimelinePoint {
    /// An empty point for the given date
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            tariff: None,
            pmi: None,
            container_volumes: Vec::new(),
            events: Vec::new(),
        }
    }
}

/// Merge the dated series into one date-ordered timeline
///
/// Inputs arrive already parsed; records sharing a date land on the same
/// point. The result is sorted ascending by date with one point per
/// distinct date.
pub fn merge_timeline(
    tariffs: &[TariffAction],
    pmi: &[PmiReading],
    volumes: &[ContainerVolume],
    events: &[TimelineEvent],
) -> Vec<TimelinePoint> {
    let mut points: BTreeMap<NaiveDate, TimelinePoint> = BTreeMap::new();

    for action in tariffs {
        points
            .entry(action.date)
            .or_insert_with(|| TimelinePoint::new(action.date))
            .tariff = Some(action.clone());
    }
    for reading in pmi {
        points
            .entry(reading.date)
            .or_insert_with(|| TimelinePoint::new(reading.date))
            .pmi = Some(reading.value);
    }
    for volume in volumes {
        points
            .entry(volume.date)
            .or_insert_with(|| TimelinePoint::new(volume.date))
            .container_volumes
            .push(*volume);
    }
    for event in events {
        points
            .entry(event.date)
            .or_insert_with(|| TimelinePoint::new(event.date))
            .events
            .push(event.clone());
    }

    points.into_values().collect()
}
