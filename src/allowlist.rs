//! Dataset allow-list and its introspection.
//!
//! Operators restrict a deployment to a set of `project.dataset` pairs. The
//! validator only ever asks one question of that configuration, so the
//! surface is a single-method trait; `AllowList` is the stock implementation.

use std::collections::BTreeSet;

use crate::models::ToolParameter;

/// Membership test for dataset restrictions.
///
/// Implementations must be safe for concurrent reads; the validator may be
/// called from many tasks at once.
pub trait DatasetPolicy: Send + Sync {
    /// Whether queries may touch tables in `project.dataset`.
    fn is_allowed(&self, project: &str, dataset: &str) -> bool;
}

/// An explicit set of allowed `(project, dataset)` pairs.
///
/// An empty list means no restriction is configured and everything is
/// allowed. Comparison is exact: BigQuery dataset IDs are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    entries: BTreeSet<(String, String)>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `project.dataset` entries as given on the command line or in
    /// deployment config.
    pub fn parse(entries: &[String]) -> Result<Self, String> {
        let mut list = Self::new();
        for entry in entries {
            let mut split = entry.splitn(2, '.');
            match (split.next(), split.next()) {
                (Some(project), Some(dataset)) if !project.is_empty() && !dataset.is_empty() => {
                    list.insert(project, dataset);
                }
                _ => {
                    return Err(format!(
                        "invalid allowed dataset '{entry}': expected project.dataset"
                    ));
                }
            }
        }
        Ok(list)
    }

    pub fn insert(&mut self, project: impl Into<String>, dataset: impl Into<String>) {
        self.entries.insert((project.into(), dataset.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The configured pairs in sorted order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, d)| (p.as_str(), d.as_str()))
    }
}

impl DatasetPolicy for AllowList {
    fn is_allowed(&self, project: &str, dataset: &str) -> bool {
        self.entries.is_empty()
            || self
                .entries
                .contains(&(project.to_string(), dataset.to_string()))
    }
}

/// Derive the project and dataset parameter descriptors a tool should
/// advertise for a given allow-list.
///
/// With exactly one allowed dataset both parameters carry it as a default
/// and their descriptions mandate it. With several, the descriptions
/// enumerate the allowed projects and the datasets grouped per project.
/// With none, both parameters stay free-form.
pub fn dataset_parameters(
    allow_list: &AllowList,
    default_project: &str,
    project_key: &str,
    dataset_key: &str,
    project_description: &str,
    dataset_description: &str,
) -> (ToolParameter, ToolParameter) {
    let mut project_description = project_description.to_string();
    let mut dataset_description = dataset_description.to_string();
    let mut default_project = default_project.to_string();

    let entries: Vec<(&str, &str)> = allow_list.entries().collect();
    let dataset_param = match entries.as_slice() {
        [] => ToolParameter::string(dataset_key, dataset_description),
        [(project, dataset)] => {
            default_project = (*project).to_string();
            project_description.push_str(&format!(" Must be `{project}`."));
            dataset_description.push_str(&format!(" Must be `{dataset}`."));
            ToolParameter::string_with_default(dataset_key, *dataset, dataset_description)
        }
        _ => {
            // entries are sorted by project, so consecutive runs group them.
            let mut project_ids: Vec<String> = Vec::new();
            let mut groups: Vec<String> = Vec::new();
            let mut run_start = 0;
            while run_start < entries.len() {
                let project = entries[run_start].0;
                let datasets: Vec<String> = entries[run_start..]
                    .iter()
                    .take_while(|(p, _)| *p == project)
                    .map(|(_, d)| format!("`{d}`"))
                    .collect();
                run_start += datasets.len();
                project_ids.push(format!("`{project}`"));
                groups.push(format!("{} from project `{project}`", datasets.join(", ")));
            }
            groups.sort();
            project_description.push_str(&format!(
                " Must be one of the following: {}.",
                project_ids.join(", ")
            ));
            dataset_description.push_str(&format!(
                " Must be one of the allowed datasets: {}.",
                groups.join("; ")
            ));
            ToolParameter::string(dataset_key, dataset_description)
        }
    };

    let project_param =
        ToolParameter::string_with_default(project_key, default_project, project_description);
    (project_param, dataset_param)
}
