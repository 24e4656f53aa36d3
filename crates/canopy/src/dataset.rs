//! A loaded dataset with every model tree built.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use canopy_search::{SearchOutcome, SearchRequest, search};
use canopy_table::{IdMaps, LoadOptions, Table, TableError, load_path};
use canopy_tree::{BuildOptions, ModelBuild, build_models};
use canopy_treemap::{Comparison, Treemap, TreemapError, compare, treemap_for_model};
use tracing::info;

/// A table together with its ID maps and the pruned tree and path index of each model.
///
/// Everything is computed once in [`Dataset::build`]; the value is read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Display name: the configured dataset name or the file name.
    name: String,
    /// File the table was read from.
    path: PathBuf,
    /// Parsed rows.
    table: Table,
    /// Parent, label, and children maps keyed by row ID.
    maps: IdMaps,
    /// Per-model builds, keyed by model name.
    builds: BTreeMap<String, ModelBuild>,
}

impl Dataset {
    /// Loads a table file and builds every model.
    pub fn open(
        name: impl Into<String>,
        path: &Path,
        load: &LoadOptions,
        build: &BuildOptions,
    ) -> Result<Self, TableError> {
        let table = load_path(path, load)?;
        Ok(Self::build(name, path.to_path_buf(), table, build))
    }

    /// Builds every model of an already-loaded table.
    pub fn build(
        name: impl Into<String>,
        path: PathBuf,
        table: Table,
        options: &BuildOptions,
    ) -> Self {
        let name = name.into();
        let maps = IdMaps::from_table(&table);
        let builds = build_models(&table, options);
        info!(
            dataset = %name,
            rows = table.len(),
            ids = maps.ids().len(),
            models = builds.len(),
            "built dataset"
        );
        Self {
            name,
            path,
            table,
            maps,
            builds,
        }
    }

    /// Returns the dataset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the source file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the parsed table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the ID maps.
    pub fn maps(&self) -> &IdMaps {
        &self.maps
    }

    /// Returns the model names in file order.
    pub fn models(&self) -> &[String] {
        self.table.models()
    }

    /// Returns the build of one model.
    pub fn model(&self, model: &str) -> Option<&ModelBuild> {
        self.builds.get(model)
    }

    /// Searches the path indexes of all models.
    pub fn search(&self, request: &SearchRequest) -> SearchOutcome {
        search(
            self.builds.iter().map(|(m, b)| (m.as_str(), &b.index)),
            request,
        )
    }

    /// Aggregates one model into treemap arrays, optionally below an anchor path.
    pub fn treemap<S: AsRef<str>>(
        &self,
        model: &str,
        path_parts: &[S],
    ) -> Result<Treemap, TreemapError> {
        treemap_for_model(&self.table, &self.maps, model, path_parts)
    }

    /// Aggregates two models over the same optional top-level section.
    pub fn compare(
        &self,
        model_a: &str,
        model_b: &str,
        section: Option<&str>,
    ) -> Result<Comparison, TreemapError> {
        compare(&self.table, &self.maps, model_a, model_b, section)
    }
}

#[cfg(test)]
mod tests {
    use canopy_search::SearchMode;
    use canopy_table::Row;
    use pretty_assertions::assert_eq;

    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn lights() -> Dataset {
        let table = Table::new(
            vec!["Base".into(), "Sport".into()],
            vec![
                Row::new("3", "3 Lights", cells(&["", ""])),
                Row::new("3.3", "3.3 Front", cells(&["", ""])),
                Row::new("3.3.1", "3.3.1 Right indicator", cells(&["LED", ""])),
                Row::new("3.3.2", "3.3.2 Left indicator", cells(&["2", "4"])),
            ],
        );
        Dataset::build("cars", PathBuf::from("cars.csv"), table, &BuildOptions::default())
    }

    #[test]
    fn test_build_covers_all_models() {
        let dataset = lights();
        assert_eq!(dataset.name(), "cars");
        assert_eq!(dataset.models(), ["Base", "Sport"]);
        assert_eq!(dataset.model("Base").unwrap().tree.value_count(), 2);
        assert_eq!(dataset.model("Sport").unwrap().tree.value_count(), 1);
        assert!(dataset.model("ID").is_none());
        assert_eq!(dataset.maps().top_level(), ["3"]);
    }

    #[test]
    fn test_search_spans_models() {
        let dataset = lights();
        let outcome = dataset.search(&SearchRequest::new("front left"));
        assert_eq!(outcome.mode, SearchMode::Stripe);
        let models: Vec<&str> = outcome.hits.iter().map(|h| h.model.as_str()).collect();
        assert_eq!(models, vec!["Base", "Sport"]);
        assert!(
            outcome
                .hits
                .iter()
                .all(|h| h.path_label == "Root > 3 Lights > 3.3 Front > 3.3.2 Left indicator")
        );

        let sport_only = dataset.search(&SearchRequest::new("right").with_model("Sport"));
        assert!(sport_only.hits.is_empty());
    }

    #[test]
    fn test_treemap_and_compare() {
        let dataset = lights();
        let map = dataset.treemap("Base", &["3 Lights"]).unwrap();
        assert_eq!(map.ids[0], "Base__root");
        // "LED" counts as presence (1), "2" as itself.
        assert_eq!(map.root_value(), 3.0);

        let comparison = dataset.compare("Base", "Sport", None).unwrap();
        assert_eq!(comparison.b.root_value(), 4.0);
        assert!(matches!(
            dataset.compare("Base", "Nope", None),
            Err(TreemapError::UnknownModel { .. })
        ));
    }
}
