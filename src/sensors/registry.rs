//! Sensor catalogue keyed by unique id.
//!
//! Sensors are kept in registration order; a side index maps ids to
//! positions.  There is no update or removal operation.

use std::collections::HashMap;

use log::debug;

use super::{Sensor, SensorId};
use crate::error::{PanelError, Result};

#[derive(Debug, Default)]
pub struct SensorRegistry {
    sensors: Vec<Sensor>,
    index: HashMap<SensorId, usize>,
}

impl SensorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `sensor` unless its id is already taken.
    ///
    /// A duplicate leaves the registry untouched (the first registration
    /// wins) and returns [`PanelError::DuplicateSensor`].
    pub fn register(&mut self, sensor: Sensor) -> Result<()> {
        if self.index.contains_key(&sensor.id) {
            return Err(PanelError::DuplicateSensor(sensor.id));
        }
        debug!("registry: inserting sensor {}", sensor.id);
        self.index.insert(sensor.id, self.sensors.len());
        self.sensors.push(sensor);
        Ok(())
    }

    pub fn get(&self, id: SensorId) -> Option<&Sensor> {
        self.index.get(&id).map(|&pos| &self.sensors[pos])
    }

    /// Like [`get`](Self::get) but reports absence as a typed error.
    pub fn lookup(&self, id: SensorId) -> Result<&Sensor> {
        self.get(id).ok_or(PanelError::UnknownSensor(id))
    }

    pub fn contains(&self, id: SensorId) -> bool {
        self.index.contains_key(&id)
    }

    /// Read-only view in registration order.
    pub fn list(&self) -> &[Sensor] {
        &self.sensors
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }
}
