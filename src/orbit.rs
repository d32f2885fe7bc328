use std::{
    collections::{HashMap, VecDeque},
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::Error;

pub type Object = String;

struct Node {
    name: Object,
    orbited: usize,
    orbiters: Vec<usize>,
    depth: usize, // Count of direct and indirect orbits.
}

/// Objects and their orbits, kept as a forest under one hidden root(the null object).
///
/// Objects seen only as orbited so far hang under the null object, and are moved
/// when the object they orbit shows up, so orbits can be added in any order.
pub struct OrbitTree {
    object_map: HashMap<Object, usize>,
    nodes: Vec<Node>,
}

impl Default for OrbitTree {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitTree {
    pub fn new() -> OrbitTree {
        OrbitTree {
            object_map: HashMap::new(),
            nodes: vec![Node {
                name: "".to_string(),
                orbited: Self::null_obj_id(),
                orbiters: Vec::new(),
                depth: 0,
            }],
        }
    }

    pub fn objects(&self) -> ObjectIterator<'_> {
        ObjectIterator::new(self)
    }

    pub fn has_obj(&self, obj: &str) -> bool {
        self.object_map.contains_key(obj)
    }

    pub fn orbit_count_of(&self, obj: &str) -> Option<usize> {
        self.object_map.get(obj).map(|&id| self.nodes[id].depth)
    }

    /// Objects from the root down to given object, both ends included.
    pub fn orbit_path_of(&self, obj: &str) -> Option<Vec<&Object>> {
        self.object_map.get(obj).map(|&id| {
            self.path_of(id)
                .into_iter()
                .map(|id| &self.nodes[id].name)
                .collect()
        })
    }

    pub fn roots(&self) -> Vec<&Object> {
        self.nodes[Self::null_obj_id()]
            .orbiters
            .iter()
            .map(|&id| &self.nodes[id].name)
            .collect()
    }

    pub fn total_orbit_count(&self) -> Result<usize, Error> {
        let roots = self.roots();
        if roots.len() != 1 {
            return Err(Error::RootCount(roots.into_iter().cloned().collect()));
        }

        Ok(self.nodes[1..].iter().map(|n| n.depth).sum())
    }

    /// Count of orbital transfers needed to move from the object `obj0` orbits
    /// to the object `obj1` orbits.
    pub fn transfer_count(&self, obj0: &str, obj1: &str) -> Result<usize, Error> {
        let orbited0 = self.orbited_id_of(obj0)?;
        let orbited1 = self.orbited_id_of(obj1)?;
        let path0 = self.path_of(orbited0);
        let path1 = self.path_of(orbited1);
        let common_n = path0
            .iter()
            .zip(path1.iter())
            .take_while(|(id0, id1)| id0 == id1)
            .count();
        if common_n == 0 {
            return Err(Error::NoCommonObject(obj0.to_string(), obj1.to_string()));
        }

        let common_depth = self.nodes[path0[common_n - 1]].depth;
        Ok((self.nodes[orbited0].depth - common_depth)
            + (self.nodes[orbited1].depth - common_depth))
    }

    pub fn add_orbit(&mut self, orbit: Orbit) -> Result<(), Error> {
        let orbited_id = self.add_obj(&orbit.orbited);
        let orbiter_id = match self.object_map.get(&orbit.orbiter).copied() {
            Some(id) => id,
            None => {
                self.push_node(orbit.orbiter, orbited_id);
                return Ok(());
            }
        };

        let cur_orbited_id = self.nodes[orbiter_id].orbited;
        if cur_orbited_id != Self::null_obj_id() {
            return Err(Error::RewriteOrbitLink(
                orbit.orbiter,
                self.nodes[cur_orbited_id].name.clone(),
                orbit.orbited,
            ));
        }

        if self.path_of(orbited_id).contains(&orbiter_id) {
            return Err(Error::OrbitCycle(orbit.orbited, orbit.orbiter));
        }

        self.relink(orbiter_id, orbited_id);
        Ok(())
    }

    fn orbited_id_of(&self, obj: &str) -> Result<usize, Error> {
        let id = *self
            .object_map
            .get(obj)
            .ok_or(Error::UnknownObject(obj.to_string()))?;
        let orbited_id = self.nodes[id].orbited;
        if orbited_id == Self::null_obj_id() {
            Err(Error::NoOrbitedObject(obj.to_string()))
        } else {
            Ok(orbited_id)
        }
    }

    // Root first, null object excluded.
    fn path_of(&self, id: usize) -> Vec<usize> {
        let mut path = Vec::new();
        let mut cur_id = id;
        while cur_id != Self::null_obj_id() {
            path.push(cur_id);
            cur_id = self.nodes[cur_id].orbited;
        }

        path.reverse();
        path
    }

    fn relink(&mut self, orbiter_id: usize, orbited_id: usize) {
        let old_orbited_id = self.nodes[orbiter_id].orbited;
        self.nodes[old_orbited_id]
            .orbiters
            .retain(|&id| id != orbiter_id);
        self.nodes[orbiter_id].orbited = orbited_id;
        self.nodes[orbited_id].orbiters.push(orbiter_id);

        // Whole subtree moves one level deeper than its new orbited object.
        let mut search_ids = VecDeque::from([orbiter_id]);
        while let Some(id) = search_ids.pop_front() {
            let depth = self.depth_under(self.nodes[id].orbited);
            self.nodes[id].depth = depth;
            search_ids.extend(self.nodes[id].orbiters.iter().copied());
        }
    }

    fn add_obj(&mut self, obj: &str) -> usize {
        match self.object_map.get(obj).copied() {
            Some(id) => id,
            None => self.push_node(obj.to_string(), Self::null_obj_id()),
        }
    }

    fn push_node(&mut self, obj: Object, orbited_id: usize) -> usize {
        let id = self.nodes.len();
        let depth = self.depth_under(orbited_id);
        self.nodes.push(Node {
            name: obj.clone(),
            orbited: orbited_id,
            orbiters: Vec::new(),
            depth,
        });
        self.nodes[orbited_id].orbiters.push(id);
        self.object_map.insert(obj, id);

        id
    }

    fn depth_under(&self, orbited_id: usize) -> usize {
        if orbited_id == Self::null_obj_id() {
            0
        } else {
            self.nodes[orbited_id].depth + 1
        }
    }

    fn null_obj_id() -> usize {
        0
    }
}

impl Display for OrbitTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut search_ids: Vec<usize> = self.nodes[Self::null_obj_id()]
            .orbiters
            .iter()
            .rev()
            .copied()
            .collect();
        while let Some(id) = search_ids.pop() {
            let node = &self.nodes[id];
            if node.depth == 0 {
                writeln!(f, "{}", node.name)?;
            } else {
                writeln!(f, "{}|-- {}", "\t".repeat(node.depth - 1), node.name)?;
            }

            search_ids.extend(node.orbiters.iter().rev().copied());
        }

        Ok(())
    }
}

impl FromStr for OrbitTree {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut orbit_tree = OrbitTree::new();
        for line in s.lines().filter(|l| !l.trim().is_empty()) {
            orbit_tree.add_orbit(Orbit::from_str(line)?)?;
        }

        Ok(orbit_tree)
    }
}

pub struct ObjectIterator<'a> {
    orbit_tree: &'a OrbitTree,
    obj_ind: usize,
}

impl<'a> Iterator for ObjectIterator<'a> {
    type Item = &'a Object;

    fn next(&mut self) -> Option<Self::Item> {
        let cur_ind = self.obj_ind;
        self.obj_ind += 1;
        self.orbit_tree.nodes.get(cur_ind).map(|n| &n.name)
    }
}

impl<'a> ObjectIterator<'a> {
    fn new(orbit_tree: &'a OrbitTree) -> Self {
        ObjectIterator {
            orbit_tree,
            obj_ind: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Orbit {
    orbited: Object,
    orbiter: Object,
}

impl FromStr for Orbit {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        static ORBIT_REGEX: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^\s*(\w+)\)(\w+)\s*$").unwrap());

        let caps = ORBIT_REGEX
            .captures(value)
            .ok_or(Error::InvalidOrbitSpec(value.to_string()))?;
        Ok(Orbit {
            orbited: caps[1].to_string(),
            orbiter: caps[2].to_string(),
        })
    }
}

pub fn read_orbits<P: AsRef<Path>>(path: P) -> Result<OrbitTree> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut orbit_tree = OrbitTree::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let orbit = Orbit::from_str(&line)
            .with_context(|| format!("Failed to parse orbit at line {}.", ind + 1))?;
        orbit_tree
            .add_orbit(orbit)
            .with_context(|| format!("Failed to add orbit at line {}.", ind + 1))?;
    }

    Ok(orbit_tree)
}
