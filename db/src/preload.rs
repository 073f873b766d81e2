//! Typed eager-load paths and the object graphs they produce.
//!
//! Each root entity has its own preload enum so callers can only ask for
//! relations that exist. A nested path such as `EventPreload::SessionsWith(Class)`
//! implies its parent, so it also loads the sessions themselves.
//!
//! Graph types flatten the root model into the JSON object and add one field per
//! relation. A relation that was not requested is `None` and left out of the JSON.

use crate::models::{attendance, attendance_session, class, event, student, teacher};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionPreload {
    Event,
    Class,
    Teacher,
    Attendances,
}

impl fmt::Display for SessionPreload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionPreload::Event => "Event",
            SessionPreload::Class => "Class",
            SessionPreload::Teacher => "Teacher",
            SessionPreload::Attendances => "Attendances",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventPreload {
    Sessions,
    SessionsWith(SessionPreload),
}

impl fmt::Display for EventPreload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventPreload::Sessions => f.write_str("Sessions"),
            EventPreload::SessionsWith(nested) => write!(f, "Sessions.{nested}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttendancePreload {
    Session,
    SessionWith(SessionPreload),
}

impl fmt::Display for AttendancePreload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendancePreload::Session => f.write_str("Session"),
            AttendancePreload::SessionWith(nested) => write!(f, "Session.{nested}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassPreload {
    Students,
    Sessions,
    SessionsWith(SessionPreload),
}

impl fmt::Display for ClassPreload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassPreload::Students => f.write_str("Students"),
            ClassPreload::Sessions => f.write_str("Sessions"),
            ClassPreload::SessionsWith(nested) => write!(f, "Sessions.{nested}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TeacherPreload {
    Sessions,
    SessionsWith(SessionPreload),
}

impl fmt::Display for TeacherPreload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeacherPreload::Sessions => f.write_str("Sessions"),
            TeacherPreload::SessionsWith(nested) => write!(f, "Sessions.{nested}"),
        }
    }
}

/// Splits a list of root paths into "is the session level requested" and the
/// nested session paths below it.
///
/// `level` maps each root path to `None` when it does not touch sessions,
/// `Some(None)` for the bare session path and `Some(Some(p))` for a nested one.
pub(crate) fn session_level<P, F>(preloads: &[P], level: F) -> Option<Vec<SessionPreload>>
where
    F: Fn(&P) -> Option<Option<SessionPreload>>,
{
    let mut requested = false;
    let mut nested = Vec::new();

    for path in preloads {
        match level(path) {
            None => {}
            Some(None) => requested = true,
            Some(Some(inner)) => {
                requested = true;
                if !nested.contains(&inner) {
                    nested.push(inner);
                }
            }
        }
    }

    requested.then_some(nested)
}

impl EventPreload {
    pub(crate) fn sessions(preloads: &[EventPreload]) -> Option<Vec<SessionPreload>> {
        session_level(preloads, |p| match p {
            EventPreload::Sessions => Some(None),
            EventPreload::SessionsWith(inner) => Some(Some(*inner)),
        })
    }
}

impl AttendancePreload {
    pub(crate) fn session(preloads: &[AttendancePreload]) -> Option<Vec<SessionPreload>> {
        session_level(preloads, |p| match p {
            AttendancePreload::Session => Some(None),
            AttendancePreload::SessionWith(inner) => Some(Some(*inner)),
        })
    }
}

impl ClassPreload {
    pub(crate) fn sessions(preloads: &[ClassPreload]) -> Option<Vec<SessionPreload>> {
        session_level(preloads, |p| match p {
            ClassPreload::Students => None,
            ClassPreload::Sessions => Some(None),
            ClassPreload::SessionsWith(inner) => Some(Some(*inner)),
        })
    }
}

impl TeacherPreload {
    pub(crate) fn sessions(preloads: &[TeacherPreload]) -> Option<Vec<SessionPreload>> {
        session_level(preloads, |p| match p {
            TeacherPreload::Sessions => Some(None),
            TeacherPreload::SessionsWith(inner) => Some(Some(*inner)),
        })
    }
}

/// Renders a preload list as `A, B.C` for log lines.
pub fn describe<P: fmt::Display>(preloads: &[P]) -> String {
    preloads
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Distinct non-null foreign key values, in ascending order.
pub(crate) fn distinct_ids<I>(ids: I) -> Vec<i64>
where
    I: IntoIterator<Item = Option<i64>>,
{
    ids.into_iter()
        .flatten()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Buckets child rows by their parent key. Rows with a null key are dropped.
pub(crate) fn group_by_parent<T, F>(rows: Vec<T>, key: F) -> HashMap<i64, Vec<T>>
where
    F: Fn(&T) -> Option<i64>,
{
    let mut grouped: HashMap<i64, Vec<T>> = HashMap::new();
    for row in rows {
        if let Some(parent) = key(&row) {
            grouped.entry(parent).or_default().push(row);
        }
    }
    grouped
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionGraph {
    #[serde(flatten)]
    pub session: attendance_session::Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<event::Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<class::Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<teacher::Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendances: Option<Vec<attendance::Model>>,
}

impl SessionGraph {
    pub fn bare(session: attendance_session::Model) -> Self {
        Self {
            session,
            event: None,
            class: None,
            teacher: None,
            attendances: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventGraph {
    #[serde(flatten)]
    pub event: event::Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions: Option<Vec<SessionGraph>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttendanceGraph {
    #[serde(flatten)]
    pub attendance: attendance::Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionGraph>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassGraph {
    #[serde(flatten)]
    pub class: class::Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub students: Option<Vec<student::Model>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions: Option<Vec<SessionGraph>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeacherGraph {
    #[serde(flatten)]
    pub teacher: teacher::Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions: Option<Vec<SessionGraph>>,
}
