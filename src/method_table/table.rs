use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use serde::{Deserialize, Serialize};

use crate::{
    callable::{Invocable, UnboundMethod},
    error::{AmenableError, no_method},
    method_table::amended::AmendedMethod,
    types::{Call, Value},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

struct MethodSlot {
    method: UnboundMethod,
    visibility: Visibility,
}

#[derive(Default)]
struct TableState {
    version: u64,
    slots: BTreeMap<String, MethodSlot>,
}

pub struct MethodTable {
    owner: String,
    state: RwLock<TableState>,
}

impl MethodTable {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            state: RwLock::new(TableState::default()),
        }
    }

    pub fn version(&self) -> u64 {
        self.state.read().expect("lock poisoned").version
    }

    pub fn define_method(&self, visibility: Visibility, method: UnboundMethod) -> String {
        let name = method.name().to_string();
        let mut guard = self.state.write().expect("lock poisoned");
        guard
            .slots
            .insert(name.clone(), MethodSlot { method, visibility });
        guard.version = guard.version.saturating_add(1);
        name
    }

    pub fn set_visibility(&self, name: &str, visibility: Visibility) -> Result<(), AmenableError> {
        let mut guard = self.state.write().expect("lock poisoned");
        let slot = guard
            .slots
            .get_mut(name)
            .ok_or_else(|| self.undefined(name))?;
        slot.visibility = visibility;
        guard.version = guard.version.saturating_add(1);
        Ok(())
    }

    pub fn instance_method(&self, name: &str) -> Option<UnboundMethod> {
        self.state
            .read()
            .expect("lock poisoned")
            .slots
            .get(name)
            .map(|slot| slot.method.clone())
    }

    pub fn visibility_of(&self, name: &str) -> Option<Visibility> {
        self.state
            .read()
            .expect("lock poisoned")
            .slots
            .get(name)
            .map(|slot| slot.visibility)
    }

    pub fn method_names(&self, visibility: Visibility) -> Vec<String> {
        self.state
            .read()
            .expect("lock poisoned")
            .slots
            .iter()
            .filter(|(_, slot)| slot.visibility == visibility)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Replaces the slot with a version that drops arguments the method does not declare.
    /// The slot keeps its visibility.
    pub fn amend(&self, name: &str) -> Result<(), AmenableError> {
        let mut guard = self.state.write().expect("lock poisoned");
        let slot = guard
            .slots
            .get_mut(name)
            .ok_or_else(|| self.undefined(name))?;

        let amended = AmendedMethod::new(slot.method.clone())?;
        slot.method = UnboundMethod::new(name, Arc::new(amended));
        let visibility = slot.visibility;
        guard.version = guard.version.saturating_add(1);

        tracing::debug!(
            target: "method_table",
            owner = %self.owner,
            method = %name,
            visibility = ?visibility,
            "method_amended"
        );
        Ok(())
    }

    pub fn send(&self, receiver: &Value, name: &str, call: Call) -> Result<Value, AmenableError> {
        let method = self
            .instance_method(name)
            .ok_or_else(|| self.undefined(name))?;
        method.bind(receiver.clone()).invoke(call)
    }

    /// Calls `name` on `receiver` from outside the object; only public slots are reachable.
    pub fn public_send(
        &self,
        receiver: &Value,
        name: &str,
        call: Call,
    ) -> Result<Value, AmenableError> {
        match self.visibility_of(name) {
            None => Err(self.undefined(name)),
            Some(Visibility::Public) => self.send(receiver, name, call),
            Some(visibility) => Err(no_method(format!(
                "{} method `{name}` called for {}",
                visibility_label(visibility),
                self.owner
            ))),
        }
    }

    fn undefined(&self, name: &str) -> AmenableError {
        no_method(format!("undefined method `{name}` for {}", self.owner))
    }
}

fn visibility_label(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Public => "public",
        Visibility::Protected => "protected",
        Visibility::Private => "private",
    }
}
