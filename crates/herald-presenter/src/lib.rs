//! Notice and dialog presentation core.
//!
//! This crate turns prompt requests into resolved fragments, mounts them on a
//! [`Surface`] and runs the two-phase teardown of notices on a [`Timeline`]
//! driven by a [`Clock`]. It also reads the optional configuration override
//! from disk.

pub mod clock;
pub mod config;
pub mod document;
pub mod fragment;
pub mod presenter;
pub mod surface;
pub mod timeline;

pub use crate::{
    clock::{Clock, ManualClock, SystemClock},
    document::{Control, Document, Phase},
    fragment::{DialogFragment, NodeId, NoticeFragment, NoticeLayout},
    presenter::Presenter,
    surface::Surface,
    timeline::Timeline,
};
