use std::{error, fmt::Display, path::PathBuf};

use clap::Parser;
use orbit::Object;

pub mod orbit;
pub mod wire;

#[derive(Debug)]
pub enum Error {
    InvalidOrbitSpec(String),
    RewriteOrbitLink(Object, Object, Object),
    OrbitCycle(Object, Object),
    RootCount(Vec<Object>),
    UnknownObject(Object),
    NoOrbitedObject(Object),
    NoCommonObject(Object, Object),
    InvalidWireMove(String),
    UnknownDirection(char),
    WireCount(usize),
    NoCrossing,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidOrbitSpec(sp) => write!(f, "Invalid orbit specification({})", sp),
            Error::RewriteOrbitLink(orbiter, orbited, new_orbited) => write!(
                f,
                "Can't rewrite orbited object(from {} to {}) of object({})",
                orbited, new_orbited, orbiter
            ),
            Error::OrbitCycle(orbited, orbiter) => write!(
                f,
                "Orbit {}){} would make a cycle, {} already orbits {} directly or indirectly",
                orbited, orbiter, orbited, orbiter
            ),
            Error::RootCount(roots) => write!(
                f,
                "Expect exactly one root object in orbit map, given {}([{}])",
                roots.len(),
                roots.join(", ")
            ),
            Error::UnknownObject(obj) => write!(f, "Object({}) not found in given orbits", obj),
            Error::NoOrbitedObject(obj) => {
                write!(f, "Object({}) is a root, it doesn't orbit anything", obj)
            }
            Error::NoCommonObject(obj0, obj1) => write!(
                f,
                "Orbit paths of {} and {} have no common object, they can never reach each other",
                obj0, obj1
            ),
            Error::InvalidWireMove(s) => write!(f, "Invalid wire move({})", s),
            Error::UnknownDirection(c) => write!(f, "Unknown wire direction({})", c),
            Error::WireCount(n) => write!(f, "Expect 2 wires, given {}", n),
            Error::NoCrossing => write!(f, "Given wires don't have any cross point"),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CliArgs {
    pub input_path: PathBuf,
}
