// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Past/upcoming partitioning of scheduled records.
//!
//! The boundary is deliberately asymmetric: a record that starts exactly at
//! `now` is *not* past (`start < now` fails) but *is* upcoming
//! (`start >= now` holds). Sorting is stable, so records with equal start
//! times keep their input order.

use crate::models::{Appointment, TrainingSession};
use chrono::NaiveDateTime;

/// Anything with a start (and usually an end) time.
pub trait Scheduled {
    fn start_time(&self) -> NaiveDateTime;

    fn end_time(&self) -> Option<NaiveDateTime> {
        None
    }
}

impl Scheduled for TrainingSession {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    fn end_time(&self) -> Option<NaiveDateTime> {
        Some(self.end_time)
    }
}

impl Scheduled for Appointment {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    fn end_time(&self) -> Option<NaiveDateTime> {
        Some(self.end_time)
    }
}

impl<T: Scheduled + ?Sized> Scheduled for &T {
    fn start_time(&self) -> NaiveDateTime {
        (**self).start_time()
    }

    fn end_time(&self) -> Option<NaiveDateTime> {
        (**self).end_time()
    }
}

/// Records that started strictly before `now`, most recent first.
pub fn past<T, I>(records: I, now: NaiveDateTime) -> Vec<T>
where
    T: Scheduled,
    I: IntoIterator<Item = T>,
{
    let mut out: Vec<T> = records
        .into_iter()
        .filter(|r| r.start_time() < now)
        .collect();
    out.sort_by(|a, b| b.start_time().cmp(&a.start_time()));
    out
}

/// Records starting at or after `now`, soonest first.
pub fn upcoming<T, I>(records: I, now: NaiveDateTime) -> Vec<T>
where
    T: Scheduled,
    I: IntoIterator<Item = T>,
{
    let mut out: Vec<T> = records
        .into_iter()
        .filter(|r| r.start_time() >= now)
        .collect();
    out.sort_by_key(|r| r.start_time());
    out
}

/// A player's sessions and appointments split around a reference instant.
#[derive(Debug)]
pub struct Timeline<'a> {
    pub past_sessions: Vec<&'a TrainingSession>,
    pub upcoming_appointments: Vec<&'a Appointment>,
}

impl<'a> Timeline<'a> {
    pub fn build(
        sessions: &'a [TrainingSession],
        appointments: &'a [Appointment],
        now: NaiveDateTime,
    ) -> Self {
        Self {
            past_sessions: past(sessions, now),
            upcoming_appointments: upcoming(appointments, now),
        }
    }
}
