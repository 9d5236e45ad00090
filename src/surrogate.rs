//! Value-semantics wrappers for a polymorphic vehicle.
//!
//! A [`VehicleSurrogate`] owns exactly one vehicle of any concrete type and
//! deep-copies it when cloned, which lets vehicles of different types live
//! in one collection.

use std::fmt;

use derive_more::Display;
use itertools::Itertools;
use rpds::Vector;

use crate::error::{Error, Result};

pub trait Vehicle: CloneVehicle + fmt::Display {
    /// Weight in kilograms
    fn weight(&self) -> f64;
}

pub trait CloneVehicle {
    fn boxed_clone(&self) -> Box<dyn Vehicle>;
}

impl<T> CloneVehicle for T
where
    T: Vehicle + Clone + 'static,
{
    fn boxed_clone(&self) -> Box<dyn Vehicle> {
        Box::new(self.clone())
    }
}

#[derive(Debug, Display, Clone, PartialEq)]
#[display(fmt = "automobile")]
pub struct Automobile {
    pub curb_weight: f64,
}

impl Vehicle for Automobile {
    fn weight(&self) -> f64 {
        self.curb_weight
    }
}

#[derive(Debug, Display, Clone, PartialEq)]
#[display(fmt = "truck carrying {}kg", cargo)]
pub struct Truck {
    pub tare: f64,
    pub cargo: f64,
}

impl Vehicle for Truck {
    fn weight(&self) -> f64 {
        self.tare + self.cargo
    }
}

#[derive(Debug, Display, Clone, PartialEq)]
#[display(fmt = "aircraft with {}kg fuel", fuel)]
pub struct Aircraft {
    pub empty_weight: f64,
    pub fuel: f64,
}

impl Vehicle for Aircraft {
    fn weight(&self) -> f64 {
        self.empty_weight + self.fuel
    }
}

/// Owns at most one vehicle.
///
/// The default surrogate is empty and every query on it fails with
/// [`Error::EmptySurrogate`].
#[derive(Default)]
pub struct VehicleSurrogate {
    vehicle: Option<Box<dyn Vehicle>>,
}

impl VehicleSurrogate {
    /// Wraps a copy of `vehicle`
    pub fn new(vehicle: &dyn Vehicle) -> Self {
        VehicleSurrogate {
            vehicle: Some(vehicle.boxed_clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vehicle.is_none()
    }

    pub fn weight(&self) -> Result<f64> {
        self.vehicle
            .as_ref()
            .map(|vehicle| vehicle.weight())
            .ok_or(Error::EmptySurrogate)
    }
}

impl<V> From<V> for VehicleSurrogate
where
    V: Vehicle + 'static,
{
    fn from(vehicle: V) -> Self {
        VehicleSurrogate {
            vehicle: Some(Box::new(vehicle)),
        }
    }
}

impl Clone for VehicleSurrogate {
    fn clone(&self) -> Self {
        VehicleSurrogate {
            vehicle: self.vehicle.as_ref().map(|vehicle| vehicle.boxed_clone()),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        // The copy exists before the old vehicle is dropped
        let copy = source.vehicle.as_ref().map(|vehicle| vehicle.boxed_clone());
        self.vehicle = copy;
    }
}

impl fmt::Display for VehicleSurrogate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.vehicle {
            Some(vehicle) => write!(f, "{} ({}kg)", vehicle, vehicle.weight()),
            None => write!(f, "empty"),
        }
    }
}

impl fmt::Debug for VehicleSurrogate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "VehicleSurrogate({})", self)
    }
}

/// A persistent collection of vehicles of mixed types.
///
/// Adding a vehicle returns a new fleet; the old one is unchanged and shares
/// structure with the new one.
#[derive(Clone, Default)]
pub struct Fleet {
    vehicles: Vector<VehicleSurrogate>,
}

impl Fleet {
    pub fn new() -> Self {
        Fleet::default()
    }

    pub fn with<S>(&self, vehicle: S) -> Self
    where
        S: Into<VehicleSurrogate>,
    {
        Fleet {
            vehicles: self.vehicles.push_back(vehicle.into()),
        }
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VehicleSurrogate> {
        self.vehicles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VehicleSurrogate> {
        self.vehicles.iter()
    }

    /// Fails on the first empty surrogate
    pub fn total_weight(&self) -> Result<f64> {
        self.vehicles.iter().map(VehicleSurrogate::weight).sum()
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.vehicles.iter().join(", "))
    }
}
