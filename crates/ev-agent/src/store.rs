//! `AgentStore` — every agent of one run, indexed by `AgentId`.
//!
//! The store never shrinks: evacuated agents keep their slot (and their
//! final exit cell) so ids stay stable for output and observers.  "Removed
//! from the active set" means `evacuated == true`.

use ev_core::{AgentId, Cell};

use crate::Agent;

pub struct AgentStore {
    pub agents: Vec<Agent>,
}

impl AgentStore {
    pub fn new(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&Agent> {
        self.agents.get(agent.index())
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(agent.index())
    }

    /// All agent ids in processing order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + use<> {
        (0..self.agents.len() as u32).map(AgentId)
    }

    /// `(AgentId, &Agent)` pairs in processing order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &Agent)> + '_ {
        self.agents
            .iter()
            .enumerate()
            .map(|(i, a)| (AgentId(i as u32), a))
    }

    pub fn active_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_active()).count()
    }

    pub fn evacuated_count(&self) -> usize {
        self.agents.len() - self.active_count()
    }

    /// Current cell of every agent, indexed by `AgentId`.
    pub fn positions(&self) -> Vec<Cell> {
        self.agents.iter().map(|a| a.position).collect()
    }
}
