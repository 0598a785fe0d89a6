//! Host entity identifiers

use crate::define_entity_id;

define_entity_id!(
    /// Identifier of a family (check-in unit)
    FamilyId
);
define_entity_id!(
    /// Identifier of a person
    PersonId
);
define_entity_id!(
    /// Identifier of a group type (e.g. "Nursery", "Elementary")
    GroupTypeId
);
define_entity_id!(
    /// Identifier of a group
    GroupId
);
define_entity_id!(
    /// Identifier of a location (room)
    LocationId
);
define_entity_id!(
    /// Identifier of a schedule (service time)
    ScheduleId
);
