//! Gate-level circuit simulation
//!
//! A [`Circuit`] is a set of named input signals and a set of named gate nodes. Each
//! node lists its inputs by name; a name refers to a declared input when one exists and
//! to a node otherwise. Nodes are stored in an arena indexed by an id map, and node to
//! node wiring must be acyclic.
//!
//! Simulation evaluates nodes in topological order. The order is computed on demand by
//! an iterative depth-first search and cached until the next [`Circuit::add_node`].
//!
//! ```
//! use proplogic::{Circuit, Gate};
//!
//! # fn main() -> Result<(), proplogic::CircuitError> {
//! let mut circuit = Circuit::new(&["a", "b", "c"]);
//! circuit.add_node("ab", Gate::And, &["a", "b"])?;
//! circuit.add_node("out", Gate::Or, &["ab", "c"])?;
//! circuit.set_outputs(&["out"])?;
//!
//! let outputs = circuit.simulate(&[("a", true), ("b", false), ("c", false)][..])?;
//! assert_eq!(outputs["out"], false);
//! # Ok(())
//! # }
//! ```

mod error;
mod gate;

pub use error::CircuitError;
pub use gate::Gate;

use crate::expression::Valuation;
use crate::truth_table::TruthTable;
use crate::LogicConfig;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// A gate instance in a circuit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitNode {
    id: Arc<str>,
    gate: Gate,
    inputs: Vec<Arc<str>>,
    value: Option<bool>,
}

impl CircuitNode {
    /// Node id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gate computed by the node
    pub fn gate(&self) -> Gate {
        self.gate
    }

    /// Input references in wiring order
    pub fn inputs(&self) -> &[Arc<str>] {
        &self.inputs
    }

    /// Output computed by the last simulation, if any
    pub fn value(&self) -> Option<bool> {
        self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// A network of logic gates over named input signals
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    inputs: Vec<Arc<str>>,
    input_set: HashSet<Arc<str>>,
    nodes: Vec<CircuitNode>,
    index: HashMap<Arc<str>, usize>,
    outputs: Vec<Arc<str>>,
    order: Option<Vec<usize>>,
}

impl Circuit {
    /// Create a circuit with the given input signals; repeated names collapse
    pub fn new<S: AsRef<str>>(inputs: &[S]) -> Self {
        let mut circuit = Circuit::default();
        for name in inputs {
            let name: Arc<str> = Arc::from(name.as_ref());
            if circuit.input_set.insert(Arc::clone(&name)) {
                circuit.inputs.push(name);
            }
        }
        circuit
    }

    /// Declared input names
    pub fn inputs(&self) -> &[Arc<str>] {
        &self.inputs
    }

    /// Output node ids
    pub fn outputs(&self) -> &[Arc<str>] {
        &self.outputs
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[CircuitNode] {
        &self.nodes
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&CircuitNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the circuit has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a gate node
    ///
    /// References are not checked here, so nodes may be added in any order; unresolved
    /// references and cycles are reported by [`topological_order`](Self::topological_order).
    ///
    /// # Errors
    ///
    /// - [`CircuitError::DuplicateNode`] if `id` is taken
    /// - [`CircuitError::InvalidArity`] if the gate does not accept `inputs.len()` inputs
    pub fn add_node<S: AsRef<str>>(
        &mut self,
        id: &str,
        gate: Gate,
        inputs: &[S],
    ) -> Result<(), CircuitError> {
        if self.index.contains_key(id) {
            return Err(CircuitError::DuplicateNode { id: Arc::from(id) });
        }
        if !gate.accepts(inputs.len()) {
            return Err(CircuitError::InvalidArity {
                id: Arc::from(id),
                gate,
                inputs: inputs.len(),
            });
        }

        let id: Arc<str> = Arc::from(id);
        self.index.insert(Arc::clone(&id), self.nodes.len());
        self.nodes.push(CircuitNode {
            id,
            gate,
            inputs: inputs.iter().map(|s| Arc::from(s.as_ref())).collect(),
            value: None,
        });
        self.order = None;
        Ok(())
    }

    /// Choose which nodes [`simulate`](Self::simulate) reports
    ///
    /// # Errors
    ///
    /// [`CircuitError::UnknownOutput`] for the first id that names no node; the previous
    /// outputs are kept.
    pub fn set_outputs<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<(), CircuitError> {
        let mut outputs = Vec::with_capacity(ids.len());
        for id in ids {
            let id = id.as_ref();
            match self.index.get_key_value(id) {
                Some((key, _)) => outputs.push(Arc::clone(key)),
                None => return Err(CircuitError::UnknownOutput { id: Arc::from(id) }),
            }
        }
        self.outputs = outputs;
        Ok(())
    }

    /// Node ids in an order where every node follows the nodes it reads
    ///
    /// # Errors
    ///
    /// - [`CircuitError::UnresolvedReference`] for a reference to an unknown name
    /// - [`CircuitError::Cycle`] if node wiring loops
    pub fn topological_order(&mut self) -> Result<Vec<Arc<str>>, CircuitError> {
        let order = self.ensure_order()?.to_vec();
        Ok(order.iter().map(|&i| Arc::clone(&self.nodes[i].id)).collect())
    }

    fn ensure_order(&mut self) -> Result<&[usize], CircuitError> {
        if self.order.is_none() {
            self.order = Some(self.compute_order()?);
        }
        Ok(self.order.as_deref().unwrap_or_default())
    }

    /// Iterative three-colour depth-first search over node to node references
    fn compute_order(&self) -> Result<Vec<usize>, CircuitError> {
        let mut marks = vec![Mark::Unvisited; self.nodes.len()];
        let mut order = Vec::with_capacity(self.nodes.len());
        // (node, index of the next input to visit)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..self.nodes.len() {
            if marks[root] != Mark::Unvisited {
                continue;
            }
            marks[root] = Mark::InProgress;
            stack.push((root, 0));

            while let Some(top) = stack.last_mut() {
                let (node, next) = *top;
                top.1 += 1;
                let current = &self.nodes[node];
                if let Some(reference) = current.inputs.get(next) {
                    if self.input_set.contains(reference) {
                        continue;
                    }
                    let child = match self.index.get(reference) {
                        Some(&child) => child,
                        None => {
                            return Err(CircuitError::UnresolvedReference {
                                node: Arc::clone(&current.id),
                                reference: Arc::clone(reference),
                            })
                        }
                    };
                    match marks[child] {
                        Mark::InProgress => {
                            return Err(CircuitError::Cycle {
                                node: Arc::clone(&self.nodes[child].id),
                            })
                        }
                        Mark::Unvisited => {
                            marks[child] = Mark::InProgress;
                            stack.push((child, 0));
                        }
                        Mark::Done => {}
                    }
                } else {
                    marks[node] = Mark::Done;
                    order.push(node);
                    stack.pop();
                }
            }
        }

        Ok(order)
    }

    /// Evaluate every node and return the value of each output
    ///
    /// All node values are cleared first. Each reference resolves to the supplied value
    /// when it names a declared input, and to the node computed earlier in the pass
    /// otherwise.
    ///
    /// # Errors
    ///
    /// - [`CircuitError::MissingInput`] if a declared input has no value
    /// - any error of [`topological_order`](Self::topological_order)
    pub fn simulate<V>(&mut self, inputs: &V) -> Result<BTreeMap<Arc<str>, bool>, CircuitError>
    where
        V: Valuation + ?Sized,
    {
        self.clear_values();
        let mut values = HashMap::with_capacity(self.inputs.len());
        for name in &self.inputs {
            let value = inputs
                .value_of(name)
                .ok_or_else(|| CircuitError::MissingInput {
                    name: Arc::clone(name),
                })?;
            values.insert(Arc::clone(name), value);
        }

        self.evaluate_nodes(&values)?;

        let mut outputs = BTreeMap::new();
        for id in &self.outputs {
            outputs.insert(Arc::clone(id), self.node_value(id)?);
        }

        log::debug!(
            "Simulated {} nodes over {} inputs, {} outputs",
            self.nodes.len(),
            self.inputs.len(),
            outputs.len()
        );
        Ok(outputs)
    }

    fn clear_values(&mut self) {
        for node in &mut self.nodes {
            node.value = None;
        }
    }

    fn evaluate_nodes(&mut self, inputs: &HashMap<Arc<str>, bool>) -> Result<(), CircuitError> {
        self.clear_values();
        let order = self.ensure_order()?.to_vec();

        let mut operands = Vec::new();
        for i in order {
            operands.clear();
            for reference in &self.nodes[i].inputs {
                let value = match inputs.get(reference) {
                    Some(&value) => Some(value),
                    None => self.index.get(reference).and_then(|&j| self.nodes[j].value),
                };
                match value {
                    Some(value) => operands.push(value),
                    None => {
                        return Err(CircuitError::UnresolvedReference {
                            node: Arc::clone(&self.nodes[i].id),
                            reference: Arc::clone(reference),
                        })
                    }
                }
            }
            let node = &mut self.nodes[i];
            node.value = Some(node.gate.apply(&operands));
        }
        Ok(())
    }

    /// Value a node received in the last simulation
    ///
    /// # Errors
    ///
    /// - [`CircuitError::UnknownOutput`] if no node has this id
    /// - [`CircuitError::OutputNotEvaluated`] before the node has been simulated
    pub fn node_value(&self, id: &str) -> Result<bool, CircuitError> {
        let node = self
            .node(id)
            .ok_or_else(|| CircuitError::UnknownOutput { id: Arc::from(id) })?;
        node.value.ok_or_else(|| CircuitError::OutputNotEvaluated {
            id: Arc::clone(&node.id),
        })
    }

    /// Tabulate one node over every combination of the declared inputs
    ///
    /// Uses the default [`LogicConfig::max_table_variables`] as the input limit.
    pub fn truth_table(&mut self, output: &str) -> Result<TruthTable, CircuitError> {
        self.truth_table_with_config(&LogicConfig::default(), output)
    }

    /// Tabulate one node, refusing circuits with more inputs than the configured limit
    ///
    /// # Errors
    ///
    /// - [`CircuitError::UnknownOutput`] if no node has this id
    /// - [`CircuitError::TooManyInputs`] beyond [`LogicConfig::max_table_variables`]
    /// - any simulation error
    pub fn truth_table_with_config(
        &mut self,
        config: &LogicConfig,
        output: &str,
    ) -> Result<TruthTable, CircuitError> {
        self.clear_values();
        if self.inputs.len() > config.max_table_variables {
            return Err(CircuitError::TooManyInputs {
                count: self.inputs.len(),
                limit: config.max_table_variables,
            });
        }
        if !self.index.contains_key(output) {
            return Err(CircuitError::UnknownOutput {
                id: Arc::from(output),
            });
        }

        let names = self.inputs.clone();
        let mut values: HashMap<Arc<str>, bool> = HashMap::with_capacity(names.len());
        TruthTable::try_from_fn(&names, |row| {
            for (name, &value) in names.iter().zip(row) {
                values.insert(Arc::clone(name), value);
            }
            self.evaluate_nodes(&values)?;
            self.node_value(output)
        })
    }
}

/// Netlist listing: inputs, one `id = GATE(refs)` line per node, outputs
impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "inputs: {}", self.inputs.join(", "))?;
        for node in &self.nodes {
            writeln!(f, "{} = {}({})", node.id, node.gate, node.inputs.join(", "))?;
        }
        writeln!(f, "outputs: {}", self.outputs.join(", "))
    }
}
