// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use slotboard_domain::{ChangeRequest, FacultyId, LeaveRequest, RequestId};
use std::sync::{Arc, Mutex};
use time::macros::date;

pub fn faculty(id: &str) -> FacultyId {
    FacultyId::new(id).expect("test faculty id")
}

pub fn leave_request(id: u64, faculty_id: &str) -> LeaveRequest {
    LeaveRequest::new(
        RequestId::new(id),
        faculty(faculty_id),
        String::from("Dr. Alan Turing"),
        String::from("CS101, AI202"),
        date!(2024 - 08 - 01),
        String::from("All Day"),
        String::from("Conference"),
    )
}

pub fn change_request(id: u64, faculty_id: &str) -> ChangeRequest {
    ChangeRequest::new(
        RequestId::new(id),
        faculty(faculty_id),
        String::from("Dr. Alan Turing"),
        String::from("Swap CS101 on Mon 9am with CS101 on Tue 10am."),
        String::from("Monday 09:00-10:00 (CS101)"),
        String::from("Tuesday 10:00-11:00 (CS101)"),
    )
}

/// Records every delivery an observer receives so a test can assert on
/// replay and fan-out behavior after the fact.
pub struct Recorder<T> {
    deliveries: Arc<Mutex<Vec<Vec<T>>>>,
}

impl<T: Clone + Send + 'static> Recorder<T> {
    pub fn new() -> Self {
        Self {
            deliveries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns an observer callback that appends each delivered
    /// collection to this recorder.
    pub fn observer(&self) -> impl Fn(&[T]) + Send + Sync + 'static {
        let deliveries = Arc::clone(&self.deliveries);
        move |collection: &[T]| {
            deliveries.lock().unwrap().push(collection.to_vec());
        }
    }

    pub fn deliveries(&self) -> Vec<Vec<T>> {
        self.deliveries.lock().unwrap().clone()
    }

    pub fn delivery_count(&self) -> usize {
        self.deliveries.lock().unwrap().len()
    }

    pub fn last(&self) -> Vec<T> {
        self.deliveries
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("recorder received no deliveries")
    }
}
