//! Page scripts: a recorded sequence of editor interactions.
//!
//! A script is a JSON array of steps. Steps that create a node may name it
//! with `as`; later steps refer to that alias through `target`, `active` or
//! `over`. A reference that is not an alias is used as a raw node id.

use pagecraft_editor::{EditSession, Mutation};
use pagecraft_model::{Catalog, LayoutKind, NodeId, StyleProps};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Invalid page script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Step {step}: no item '{item}' in category '{category}'")]
    UnknownItem {
        step: usize,
        category: String,
        item: String,
    },

    #[error("Step {step}: alias '{alias}' is already defined")]
    DuplicateAlias { step: usize, alias: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Step {
    Add {
        category: String,
        item: String,
        #[serde(rename = "as", default, skip_serializing_if = "Option::is_none")]
        alias: Option<String>,
    },
    UpdateProps {
        target: String,
        patch: StyleProps,
    },
    Remove {
        target: String,
    },
    Reorder {
        active: String,
        #[serde(default)]
        over: Option<String>,
    },
    Select {
        target: String,
    },
    ClearSelection,
    Toggle {
        target: String,
    },
    Group {
        layout: LayoutKind,
        #[serde(rename = "as", default, skip_serializing_if = "Option::is_none")]
        alias: Option<String>,
    },
    Ungroup {
        target: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageScript {
    pub steps: Vec<Step>,
}

/// Outcome of replaying a script
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub applied: usize,
    pub ignored: usize,
}

impl PageScript {
    pub fn from_json(source: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Replay every step against `session`.
    ///
    /// Steps the editor rejects are counted as ignored; only a missing catalog
    /// item or a reused alias aborts the replay.
    pub fn replay(
        &self,
        session: &mut EditSession,
        catalog: &Catalog,
    ) -> Result<ReplayReport, ScriptError> {
        let mut aliases: HashMap<String, NodeId> = HashMap::new();
        let mut report = ReplayReport::default();

        let resolve = |aliases: &HashMap<String, NodeId>, name: &str| {
            aliases.get(name).cloned().unwrap_or_else(|| NodeId::from(name))
        };

        for (index, step) in self.steps.iter().enumerate() {
            let step_no = index + 1;
            let (mutation, alias) = match step {
                Step::Add { category, item, alias } => {
                    let found = catalog.find(category, item).ok_or_else(|| {
                        ScriptError::UnknownItem {
                            step: step_no,
                            category: category.clone(),
                            item: item.clone(),
                        }
                    })?;
                    let mutation = Mutation::Add {
                        item: found.clone(),
                        category: category.clone(),
                    };
                    (mutation, alias.as_ref())
                }
                Step::UpdateProps { target, patch } => (
                    Mutation::UpdateProps {
                        id: resolve(&aliases, target),
                        patch: patch.clone(),
                    },
                    None,
                ),
                Step::Remove { target } => (
                    Mutation::Remove {
                        id: resolve(&aliases, target),
                    },
                    None,
                ),
                Step::Reorder { active, over } => (
                    Mutation::Reorder {
                        active: resolve(&aliases, active),
                        over: over.as_deref().map(|over| resolve(&aliases, over)),
                    },
                    None,
                ),
                Step::Select { target } => (
                    Mutation::Select {
                        id: resolve(&aliases, target),
                    },
                    None,
                ),
                Step::ClearSelection => (Mutation::ClearSelection, None),
                Step::Toggle { target } => (
                    Mutation::ToggleMultiSelect {
                        id: resolve(&aliases, target),
                    },
                    None,
                ),
                Step::Group { layout, alias } => (Mutation::Group { layout: *layout }, alias.as_ref()),
                Step::Ungroup { target } => (
                    Mutation::Ungroup {
                        id: resolve(&aliases, target),
                    },
                    None,
                ),
            };

            if let Some(alias) = alias.filter(|alias| aliases.contains_key(*alias)) {
                return Err(ScriptError::DuplicateAlias {
                    step: step_no,
                    alias: alias.clone(),
                });
            }

            let result = session.dispatch(mutation);
            if !result.is_applied() {
                report.ignored += 1;
                continue;
            }
            report.applied += 1;

            if let (Some(alias), Some(id)) = (alias, result.created_id()) {
                aliases.insert(alias.clone(), id.clone());
            }
        }

        Ok(report)
    }
}
