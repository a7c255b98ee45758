//! Assignment domain models.
//!
//! Snapshots supplied by external collaborators (technicians, service
//! orders) and the request the engine hands back.
//!
//! # Domain Mappings
//!
//! | u-assign | Workshop | Field Service | Help Desk |
//! |----------|----------|---------------|-----------|
//! | Technician | Mechanic | Field Engineer | Support Agent |
//! | ServiceOrder | Repair Order | Work Order | Ticket |
//! | ServiceRequirement | Job Requirements | Dispatch Criteria | Routing Criteria |
//! | AssignmentRequest | Job Card | Dispatch | Ticket Assignment |

mod assignment;
mod requirement;
mod technician;

pub use assignment::{AssignmentOptions, AssignmentRequest};
pub use requirement::{Priority, ServiceOrder, ServiceRequirement};
pub use technician::{Technician, TechnicianStatus, DEFAULT_MAX_JOBS};
