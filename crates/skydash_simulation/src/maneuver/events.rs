//! Maneuver events

use bevy::prelude::*;

use super::components::ManeuverKind;

/// Запрос dash (double activation, host, AI)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashIntent {
    pub entity: Entity,
}

/// Прервать активный manoeuvre (lock отпускается в том же tick)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelManeuver {
    pub entity: Entity,
}

/// Manoeuvre завершился (сам или через CancelManeuver)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManeuverFinished {
    pub entity: Entity,
    pub kind: ManeuverKind,
    pub cancelled: bool,
}
