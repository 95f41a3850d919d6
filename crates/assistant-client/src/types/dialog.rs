//! Dialog nodes.
//!
//! The service stores dialog nodes as a flat list. Tree position is given by
//! `parent` and `previous_sibling` IDs; [`DialogTree`] rebuilds the hierarchy
//! from such a list.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{AdditionalProperties, Metadata, Pagination};
use super::output::DialogNodeOutputGeneric;
use crate::error::{Error, Result};

/// Node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogNodeType {
    /// Regular node.
    Standard,
    /// Handler for a slot or frame event.
    EventHandler,
    /// Node with slots.
    Frame,
    /// Slot of a frame node.
    Slot,
    /// Conditional response.
    ResponseCondition,
    /// Folder.
    Folder,
}

/// Event an `event_handler` node handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    /// Slot gets focus.
    Focus,
    /// Input received.
    Input,
    /// Slot filled.
    Filled,
    /// Slot value being validated.
    Validate,
    /// Several slots filled at once.
    FilledMultiple,
    /// Generic handler.
    Generic,
    /// No match.
    Nomatch,
    /// No-match responses exhausted.
    NomatchResponsesDepleted,
    /// Return from a digression.
    DigressionReturnPrompt,
}

/// Whether the conversation may digress into this node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigressIn {
    /// No digressions in.
    NotAvailable,
    /// Digress in and return.
    Returns,
    /// Digress in without returning.
    DoesNotReturn,
}

/// Whether the conversation may digress away from this node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigressOut {
    /// Only to nodes that return.
    AllowReturning,
    /// To any node.
    AllowAll,
    /// To any node, never returning.
    AllowAllNeverReturn,
}

/// Whether slot filling may be interrupted by a digression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigressOutSlots {
    /// No digressions while filling slots.
    NotAllowed,
    /// Only to nodes that return.
    AllowReturning,
    /// To any node.
    AllowAll,
}

/// What happens after a node runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStepBehavior {
    /// Wait for user input.
    GetUserInput,
    /// Skip waiting and evaluate the next node.
    SkipUserInput,
    /// Jump to another node.
    JumpTo,
}

/// Part of the target node to evaluate after a jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStepSelector {
    /// Evaluate the condition.
    Condition,
    /// Run the client action.
    Client,
    /// Wait for user input.
    UserInput,
    /// Run the node body.
    Body,
}

/// Jump target of a dialog node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogNodeNextStep {
    /// What happens next.
    pub behavior: NextStepBehavior,
    /// Target node, required for `jump_to`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
    /// Part of the target to evaluate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<NextStepSelector>,
}

impl DialogNodeNextStep {
    /// A `jump_to` step targeting `dialog_node`.
    pub fn jump_to(dialog_node: impl Into<String>, selector: NextStepSelector) -> Self {
        Self {
            behavior: NextStepBehavior::JumpTo,
            dialog_node: Some(dialog_node.into()),
            selector: Some(selector),
        }
    }

    /// Check that a `jump_to` step names its target.
    pub fn validate(&self) -> Result<()> {
        let has_target = self.dialog_node.as_deref().is_some_and(|t| !t.is_empty());
        if self.behavior == NextStepBehavior::JumpTo && !has_target {
            return Err(Error::Validation(
                "`next_step.dialog_node` is required when behavior is `jump_to`".to_string(),
            ));
        }
        Ok(())
    }
}

/// Kind of action a node invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogNodeActionType {
    /// Run by the client application.
    Client,
    /// Run by a server.
    Server,
    /// Cloud function.
    CloudFunction,
    /// Web action.
    WebAction,
    /// Webhook.
    Webhook,
}

/// An action invoked by a dialog node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeAction {
    /// Action name.
    pub name: String,
    /// Action kind.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<DialogNodeActionType>,
    /// Action parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Metadata>,
    /// Context variable receiving the result.
    pub result_variable: String,
    /// Context variable holding credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
}

/// Modifiers applied to node output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogNodeOutputModifiers {
    /// Whether this output replaces output from previously visited nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
}

/// Output of a dialog node. Unknown keys are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeOutput {
    /// Response items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic: Option<Vec<DialogNodeOutputGeneric>>,
    /// Integration-specific output, keyed by integration name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrations: Option<Map<String, Value>>,
    /// Output modifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<DialogNodeOutputModifiers>,
    /// Keys not modelled above.
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

/// Context set by a dialog node. Unknown keys are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeContext {
    /// Integration-specific context, keyed by integration name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrations: Option<Map<String, Value>>,
    /// Context variables and any other keys.
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

/// One node of the conversation flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogNode {
    /// Node ID, unique within the workspace.
    pub dialog_node: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Condition expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
    /// Parent node ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Previous sibling node ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_sibling: Option<String>,
    /// Output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<DialogNodeOutput>,
    /// Context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<DialogNodeContext>,
    /// Arbitrary metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Jump target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_step: Option<DialogNodeNextStep>,
    /// Node title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Node type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<DialogNodeType>,
    /// Handled event, for `event_handler` nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<EventName>,
    /// Context variable a slot fills.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    /// Actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<DialogNodeAction>>,
    /// Digress-in policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_in: Option<DigressIn>,
    /// Digress-out policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_out: Option<DigressOut>,
    /// Digress-out policy while filling slots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_out_slots: Option<DigressOutSlots>,
    /// Label shown in disambiguation suggestions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,
    /// Whether the node is excluded from disambiguation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation_opt_out: Option<bool>,
    /// Whether the node is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl DialogNode {
    /// Create a node with only its ID set.
    pub fn new(dialog_node: impl Into<String>) -> Self {
        Self {
            dialog_node: dialog_node.into(),
            ..Default::default()
        }
    }
}

/// Response for list dialog nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeCollection {
    /// Dialog nodes, in server order.
    pub dialog_nodes: Vec<DialogNode>,
    /// Pagination details.
    pub pagination: Pagination,
}

impl AdditionalProperties for DialogNodeOutput {
    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_properties
    }
}

impl AdditionalProperties for DialogNodeContext {
    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_properties
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tree reconstruction
// ─────────────────────────────────────────────────────────────────────────────

/// A dialog node with its ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogTreeNode<'a> {
    /// The node.
    pub node: &'a DialogNode,
    /// Children, in sibling order.
    pub children: Vec<DialogTreeNode<'a>>,
}

/// Hierarchy rebuilt from a flat list of dialog nodes.
///
/// Siblings are ordered by following `previous_sibling` links from the node
/// that has none. Nodes whose parent is not in the list are treated as roots.
/// Siblings that cannot be reached through the chain (broken or cyclic links)
/// are appended after it in list order. Nodes are keyed by `dialog_node`, so
/// each ID appears exactly once: when the list repeats an ID, one of the nodes
/// carrying it is kept and the others are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogTree<'a> {
    /// Top-level nodes, in sibling order.
    pub roots: Vec<DialogTreeNode<'a>>,
}

impl<'a> DialogTree<'a> {
    /// Build the tree for `nodes`.
    pub fn from_nodes(nodes: &'a [DialogNode]) -> Self {
        let ids: HashSet<&str> = nodes.iter().map(|n| n.dialog_node.as_str()).collect();

        let mut grouped: HashMap<Option<&str>, Vec<&DialogNode>> = HashMap::new();
        for node in nodes {
            let parent = node.parent.as_deref().filter(|p| ids.contains(p));
            grouped.entry(parent).or_default().push(node);
        }

        let mut visited = HashSet::new();
        let mut roots = build_level(None, &grouped, &mut visited);

        // Parent cycles leave nodes unreachable from the top level.
        for node in nodes {
            if visited.insert(node.dialog_node.as_str()) {
                let children = build_level(Some(node.dialog_node.as_str()), &grouped, &mut visited);
                roots.push(DialogTreeNode { node, children });
            }
        }
        Self { roots }
    }

    /// Total number of nodes in the tree.
    pub fn len(&self) -> usize {
        fn count(nodes: &[DialogTreeNode<'_>]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.roots)
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Node IDs in depth-first order.
    pub fn depth_first_ids(&self) -> Vec<&'a str> {
        fn walk<'a>(nodes: &[DialogTreeNode<'a>], out: &mut Vec<&'a str>) {
            for node in nodes {
                let dialog_node: &'a DialogNode = node.node;
                out.push(dialog_node.dialog_node.as_str());
                walk(&node.children, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.roots, &mut out);
        out
    }
}

fn build_level<'a>(
    parent: Option<&'a str>,
    grouped: &HashMap<Option<&'a str>, Vec<&'a DialogNode>>,
    visited: &mut HashSet<&'a str>,
) -> Vec<DialogTreeNode<'a>> {
    let Some(siblings) = grouped.get(&parent) else {
        return Vec::new();
    };

    let ordered = order_siblings(siblings);
    let mut level = Vec::with_capacity(ordered.len());
    for node in ordered {
        // Guards against parent cycles.
        if !visited.insert(node.dialog_node.as_str()) {
            continue;
        }
        let children = build_level(Some(node.dialog_node.as_str()), grouped, visited);
        level.push(DialogTreeNode { node, children });
    }
    level
}

fn order_siblings<'a>(siblings: &[&'a DialogNode]) -> Vec<&'a DialogNode> {
    let in_level: HashSet<&str> = siblings.iter().map(|n| n.dialog_node.as_str()).collect();
    let mut next: HashMap<&str, &'a DialogNode> = HashMap::new();
    let mut first = Vec::new();

    for &node in siblings {
        match node.previous_sibling.as_deref() {
            Some(prev) if in_level.contains(prev) => {
                next.entry(prev).or_insert(node);
            }
            _ => first.push(node),
        }
    }

    let mut placed: HashSet<&str> = HashSet::new();
    let mut ordered = Vec::with_capacity(siblings.len());
    for head in first {
        let mut current = Some(head);
        while let Some(node) = current {
            if !placed.insert(node.dialog_node.as_str()) {
                break;
            }
            ordered.push(node);
            current = next.get(node.dialog_node.as_str()).copied();
        }
    }

    for &node in siblings {
        if placed.insert(node.dialog_node.as_str()) {
            ordered.push(node);
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(id: &str, parent: Option<&str>, previous: Option<&str>) -> DialogNode {
        DialogNode {
            dialog_node: id.to_string(),
            parent: parent.map(str::to_string),
            previous_sibling: previous.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_jump_to_requires_target() {
        let step = DialogNodeNextStep {
            behavior: NextStepBehavior::JumpTo,
            dialog_node: None,
            selector: Some(NextStepSelector::Body),
        };
        assert!(step.validate().unwrap_err().is_validation());

        let step = DialogNodeNextStep::jump_to("node_2", NextStepSelector::Condition);
        assert!(step.validate().is_ok());

        let step = DialogNodeNextStep {
            behavior: NextStepBehavior::GetUserInput,
            dialog_node: None,
            selector: None,
        };
        assert!(step.validate().is_ok());
    }

    #[test]
    fn test_dialog_node_output_preserves_unknown_keys() {
        let raw = json!({
            "generic": [{"response_type": "text", "values": [{"text": "Hi"}]}],
            "modifiers": {"overwrite": true},
            "custom_flag": {"x": 1}
        });

        let output: DialogNodeOutput = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(output.get_property("custom_flag"), Some(&json!({"x": 1})));
        assert_eq!(output.generic.as_ref().unwrap().len(), 1);
        assert_eq!(serde_json::to_value(&output).unwrap(), raw);
    }

    #[test]
    fn test_dialog_node_context_preserves_unknown_keys() {
        let raw = json!({"integrations": {"chat": {"skip": true}}, "$reservation": "pending"});
        let context: DialogNodeContext = serde_json::from_value(raw.clone()).unwrap();
        assert!(context.integrations.is_some());
        assert_eq!(context.get_property("$reservation"), Some(&json!("pending")));
        assert_eq!(serde_json::to_value(&context).unwrap(), raw);
    }

    #[test]
    fn test_dialog_node_type_uses_type_key() {
        let node: DialogNode = serde_json::from_value(json!({
            "dialog_node": "slot_1",
            "type": "slot",
            "variable": "$size",
            "digress_out_slots": "allow_all",
            "next_step": {"behavior": "jump_to", "dialog_node": "node_9", "selector": "user_input"}
        }))
        .unwrap();

        assert_eq!(node.node_type, Some(DialogNodeType::Slot));
        assert_eq!(node.digress_out_slots, Some(DigressOutSlots::AllowAll));
        assert_eq!(
            node.next_step,
            Some(DialogNodeNextStep::jump_to("node_9", NextStepSelector::UserInput))
        );
    }

    #[test]
    fn test_tree_orders_siblings_by_chain() {
        // Server order deliberately differs from sibling order.
        let nodes = vec![
            node("anything_else", None, Some("greeting")),
            node("welcome", None, None),
            node("greeting_reply", Some("greeting"), None),
            node("greeting", None, Some("welcome")),
        ];

        let tree = DialogTree::from_nodes(&nodes);
        assert_eq!(tree.len(), 4);
        assert_eq!(
            tree.depth_first_ids(),
            ["welcome", "greeting", "greeting_reply", "anything_else"]
        );
    }

    #[test]
    fn test_tree_keeps_orphans_and_broken_links() {
        let nodes = vec![
            node("a", None, None),
            node("orphan", Some("missing_parent"), None),
            node("c", None, Some("unknown")),
            node("loop_1", Some("a"), Some("loop_2")),
            node("loop_2", Some("a"), Some("loop_1")),
        ];

        let tree = DialogTree::from_nodes(&nodes);
        assert_eq!(tree.len(), 5);
        let ids = tree.depth_first_ids();
        assert_eq!(ids[0], "a");
        assert!(ids.contains(&"orphan"));
        assert!(ids.contains(&"loop_1"));
        assert!(ids.contains(&"loop_2"));
    }

    #[test]
    fn test_tree_keeps_parent_cycles() {
        let nodes = vec![
            node("root", None, None),
            node("x", Some("y"), None),
            node("y", Some("x"), None),
        ];

        let tree = DialogTree::from_nodes(&nodes);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.depth_first_ids(), ["root", "x", "y"]);
    }

    #[test]
    fn test_tree_keeps_one_node_per_id() {
        let nodes = vec![
            node("a", None, None),
            node("b", None, Some("a")),
            node("a", None, Some("b")),
        ];

        let tree = DialogTree::from_nodes(&nodes);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.depth_first_ids(), ["a", "b"]);
        assert!(std::ptr::eq(tree.roots[0].node, &nodes[0]));
    }

    #[test]
    fn test_empty_tree() {
        let tree = DialogTree::from_nodes(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }
}
