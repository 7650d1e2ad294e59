//! Lexical scope chain used for hoisting decisions.
//!
//! Frames live in a `ScopeArena` and are addressed by `ScopeId` handles. Each
//! frame holds the interned names declared in it and a handle to its parent.
//! One frame is created for the program wrapper and one per function body.
//!
//! The lookup model is function-scoped hoisting without shadowing: a name
//! visible in any enclosing frame is never declared again, and a name visible
//! nowhere is declared in the frame where the lookup started.

use kettle_common::{Atom, Interner};
use rustc_hash::FxHashSet;

/// Handle to a frame in a `ScopeArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(pub u32);

impl ScopeId {
    /// Sentinel for "no frame" (the parent of a root frame).
    pub const NONE: ScopeId = ScopeId(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Outcome of a declaring lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Declaration {
    /// The name is visible in this frame or an ancestor; no keyword needed.
    AlreadyDeclared,
    /// The name was visible nowhere and is now declared in the queried frame.
    NewlyDeclared,
}

impl Declaration {
    #[inline]
    pub fn is_new(self) -> bool {
        self == Self::NewlyDeclared
    }
}

const FIRST_TEMP_NAME: &str = "__a";

struct ScopeFrame {
    parent: ScopeId,
    names: FxHashSet<Atom>,
    /// Last synthetic name handed out by this frame.
    temp_cursor: String,
}

impl ScopeFrame {
    fn new(parent: ScopeId) -> Self {
        Self {
            parent,
            names: FxHashSet::default(),
            temp_cursor: FIRST_TEMP_NAME.to_string(),
        }
    }
}

/// Arena of scope frames for a single render.
#[derive(Default)]
pub struct ScopeArena {
    frames: Vec<ScopeFrame>,
    interner: Interner,
}

impl ScopeArena {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            interner: Interner::new(),
        }
    }

    /// Create a frame with no parent.
    pub fn create_root(&mut self) -> ScopeId {
        self.push_frame(ScopeId::NONE)
    }

    /// Create a frame nested in `parent` (a function body).
    pub fn create_child(&mut self, parent: ScopeId) -> ScopeId {
        self.push_frame(parent)
    }

    fn push_frame(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.frames.len() as u32);
        self.frames.push(ScopeFrame::new(parent));
        id
    }

    /// Parent of a frame, `None` for root frames.
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.frames
            .get(scope.index())
            .map(|frame| frame.parent)
            .filter(|parent| !parent.is_none())
    }

    /// Number of frames created so far.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Resolve `name` against the chain starting at `scope`, declaring it in
    /// `scope` when no frame in the chain has it.
    pub fn find(&mut self, scope: ScopeId, name: &str) -> Declaration {
        let atom = self.interner.intern(name);
        let declaration = self.find_atom(scope, atom, false);
        if declaration.is_new() {
            tracing::trace!(name, scope = scope.0, "declared");
        }
        declaration
    }

    /// Remote lookups come from a descendant frame and never mutate.
    fn find_atom(&mut self, scope: ScopeId, atom: Atom, remote: bool) -> Declaration {
        let Some(frame) = self.frames.get(scope.index()) else {
            return Declaration::NewlyDeclared;
        };
        if frame.names.contains(&atom) {
            return Declaration::AlreadyDeclared;
        }
        let parent = frame.parent;
        if !parent.is_none() && !self.find_atom(parent, atom, true).is_new() {
            return Declaration::AlreadyDeclared;
        }
        if !remote && let Some(frame) = self.frames.get_mut(scope.index()) {
            frame.names.insert(atom);
        }
        Declaration::NewlyDeclared
    }

    /// Whether `name` is visible from `scope`. Never declares.
    pub fn check(&self, scope: ScopeId, name: &str) -> bool {
        let Some(atom) = self.interner.lookup(name) else {
            return false;
        };
        let mut current = scope;
        while let Some(frame) = self.frames.get(current.index()) {
            if frame.names.contains(&atom) {
                return true;
            }
            current = frame.parent;
        }
        false
    }

    /// Allocate a synthetic name not visible from `scope` and declare it there.
    ///
    /// Names follow string-successor order: `__a`, `__b`, ..., `__z`, `__aa`.
    pub fn free_variable(&mut self, scope: ScopeId) -> String {
        let mut candidate = self
            .frames
            .get(scope.index())
            .map(|frame| frame.temp_cursor.clone())
            .unwrap_or_else(|| FIRST_TEMP_NAME.to_string());
        while self.check(scope, &candidate) {
            candidate = next_temp_name(&candidate);
        }
        let atom = self.interner.intern(&candidate);
        if let Some(frame) = self.frames.get_mut(scope.index()) {
            frame.names.insert(atom);
            frame.temp_cursor.clone_from(&candidate);
        }
        tracing::trace!(name = %candidate, scope = scope.0, "allocated temporary");
        candidate
    }

    /// Names declared directly in `scope`, sorted.
    pub fn declared_names(&self, scope: ScopeId) -> Vec<&str> {
        let Some(frame) = self.frames.get(scope.index()) else {
            return Vec::new();
        };
        let mut names: Vec<&str> = frame
            .names
            .iter()
            .map(|&atom| self.interner.resolve(atom))
            .collect();
        names.sort_unstable();
        names
    }
}

/// Successor of a temporary name: increment the letter suffix with carry.
fn next_temp_name(current: &str) -> String {
    let mut letters: Vec<u8> = current.trim_start_matches('_').bytes().collect();
    let mut i = letters.len();
    loop {
        if i == 0 {
            letters.insert(0, b'a');
            break;
        }
        i -= 1;
        if letters[i] == b'z' {
            letters[i] = b'a';
        } else {
            letters[i] += 1;
            break;
        }
    }
    let suffix: String = letters.iter().map(|&b| b as char).collect();
    format!("__{suffix}")
}

#[cfg(test)]
#[path = "../tests/scope.rs"]
mod tests;
