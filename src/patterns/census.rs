/// Count and share of one category in a generation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryTally {
    pub name: &'static str,
    pub label: &'static str,
    pub count: usize,
    /// `count * 100 / total`, or 0 when nothing matched
    pub percentage: f64,
}

/// Per-category counts and percentages for one grid snapshot.
///
/// Built fresh by every `classify` call; holds no reference to the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationReport {
    tallies: Vec<CategoryTally>,
    total: usize,
}

impl GenerationReport {
    /// Build a report from `(name, label, count)` triples, in order
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str, usize)>,
    {
        let counts: Vec<_> = counts.into_iter().collect();
        let total = counts.iter().map(|&(_, _, count)| count).sum();

        let tallies = counts
            .into_iter()
            .map(|(name, label, count)| CategoryTally {
                name,
                label,
                count,
                percentage: percentage(count, total),
            })
            .collect();

        Self { tallies, total }
    }

    pub fn tallies(&self) -> &[CategoryTally] {
        &self.tallies
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn get(&self, name: &str) -> Option<&CategoryTally> {
        self.tallies.iter().find(|t| t.name == name)
    }

    /// Count for `name`, 0 when the category is unknown
    pub fn count(&self, name: &str) -> usize {
        self.get(name).map_or(0, |t| t.count)
    }

    pub fn percentage(&self, name: &str) -> f64 {
        self.get(name).map_or(0.0, |t| t.percentage)
    }
}

/// Share of `count` in `total` as a floating-point percentage
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 100.0) / total as f64
}
