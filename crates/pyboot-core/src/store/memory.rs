use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::{ConfigStore, ScanTarget, StoreKey, SubkeyInfo};

#[derive(Debug, Clone, Default)]
struct Node {
    children: Vec<(String, Node)>,
    value: Option<String>,
    unreadable_value: bool,
    unreadable_names: HashSet<u32>,
}

impl Node {
    fn child_mut(&mut self, name: &str) -> &mut Node {
        if let Some(index) = self.children.iter().position(|(key, _)| key == name) {
            return &mut self.children[index].1;
        }
        self.children.push((name.to_string(), Node::default()));
        let last = self.children.len() - 1;
        &mut self.children[last].1
    }

    fn child(&self, name: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, node)| node)
    }
}

#[derive(Debug, Default)]
struct HandleCounter {
    open: AtomicUsize,
    peak: AtomicUsize,
}

/// In-memory store keyed by scan label, counting open key handles.
#[derive(Debug)]
pub(crate) struct MemoryStore {
    root_path: String,
    roots: HashMap<String, Node>,
    failing: HashSet<String>,
    handles: Arc<HandleCounter>,
}

impl MemoryStore {
    pub(crate) fn new(root_path: &str) -> Self {
        Self {
            root_path: root_path.to_string(),
            roots: HashMap::new(),
            failing: HashSet::new(),
            handles: Arc::new(HandleCounter::default()),
        }
    }

    fn version_node(&mut self, label: &str, version: &str) -> &mut Node {
        self.roots
            .entry(label.to_string())
            .or_default()
            .child_mut(version)
    }

    pub(crate) fn with_install(mut self, label: &str, version: &str, dir: &str) -> Self {
        self.version_node(label, version).child_mut("InstallPath").value = Some(dir.to_string());
        self
    }

    pub(crate) fn with_version_without_install_path(mut self, label: &str, version: &str) -> Self {
        self.version_node(label, version);
        self
    }

    pub(crate) fn with_unreadable_install_path(mut self, label: &str, version: &str) -> Self {
        self.version_node(label, version)
            .child_mut("InstallPath")
            .unreadable_value = true;
        self
    }

    pub(crate) fn with_unreadable_name(mut self, label: &str, index: u32) -> Self {
        self.roots
            .entry(label.to_string())
            .or_default()
            .unreadable_names
            .insert(index);
        self
    }

    pub(crate) fn with_failing_root(mut self, label: &str) -> Self {
        self.failing.insert(label.to_string());
        self
    }

    pub(crate) fn open_handles(&self) -> usize {
        self.handles.open.load(Ordering::SeqCst)
    }

    pub(crate) fn peak_handles(&self) -> usize {
        self.handles.peak.load(Ordering::SeqCst)
    }
}

pub(crate) struct MemoryKey {
    node: Node,
    handles: Arc<HandleCounter>,
}

impl MemoryKey {
    fn open(node: Node, handles: &Arc<HandleCounter>) -> Self {
        let open = handles.open.fetch_add(1, Ordering::SeqCst) + 1;
        handles.peak.fetch_max(open, Ordering::SeqCst);
        Self {
            node,
            handles: Arc::clone(handles),
        }
    }
}

impl Drop for MemoryKey {
    fn drop(&mut self) {
        self.handles.open.fetch_sub(1, Ordering::SeqCst);
    }
}

fn not_found(what: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("{what} not found"))
}

impl StoreKey for MemoryKey {
    fn subkey_info(&self) -> io::Result<SubkeyInfo> {
        let count = u32::try_from(self.node.children.len())
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        let max_name_len = self
            .node
            .children
            .iter()
            .map(|(name, _)| u32::try_from(name.len()).unwrap_or(u32::MAX))
            .max()
            .unwrap_or(0);
        Ok(SubkeyInfo {
            count,
            max_name_len,
        })
    }

    fn subkey_name(&self, index: u32) -> io::Result<String> {
        if self.node.unreadable_names.contains(&index) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "subkey name unreadable",
            ));
        }
        self.node
            .children
            .get(index as usize)
            .map(|(name, _)| name.clone())
            .ok_or_else(|| not_found("subkey index"))
    }

    fn open_subkey(&self, path: &str) -> io::Result<Self> {
        let mut node = &self.node;
        for part in path.split('\\') {
            node = node.child(part).ok_or_else(|| not_found(path))?;
        }
        Ok(Self::open(node.clone(), &self.handles))
    }

    fn default_string(&self) -> io::Result<String> {
        if self.node.unreadable_value {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "value is not a string",
            ));
        }
        self.node.value.clone().ok_or_else(|| not_found("default value"))
    }
}

impl ConfigStore for MemoryStore {
    type Key = MemoryKey;

    fn open_root(&self, target: &ScanTarget, path: &str) -> io::Result<MemoryKey> {
        if self.failing.contains(&target.label) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "access denied"));
        }
        if !path.eq_ignore_ascii_case(&self.root_path) {
            return Err(not_found(path));
        }
        let node = self
            .roots
            .get(&target.label)
            .ok_or_else(|| not_found(&target.label))?;
        Ok(MemoryKey::open(node.clone(), &self.handles))
    }
}
