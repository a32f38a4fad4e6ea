//! Container selection: runs one trial per bin and keeps the first that
//! seats every item.

use crate::bin::Bin;
use crate::item::Item;
use rayon::prelude::*;
use std::time::Instant;
use u_packing_core::solver::{BinOrder, Config, ItemOrder, Solver};
use u_packing_core::{Error, Result, SolveResult};

/// First-fit 3D container packer.
///
/// Bins are tried in order. Each trial starts from an empty copy of the bin
/// and places the items one by one; the first item that cannot be placed
/// ends the trial. The first bin whose trial places all items is returned.
#[derive(Debug, Clone, Default)]
pub struct Packer3D {
    config: Config,
}

impl Packer3D {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn ordered_items<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        let mut ordered: Vec<&Item> = items.iter().collect();
        if self.config.item_order == ItemOrder::VolumeDescending {
            ordered.sort_by(|a, b| b.volume().cmp(&a.volume()));
        }
        ordered
    }

    fn ordered_bins<'a>(&self, bins: &'a [Bin]) -> Vec<(usize, &'a Bin)> {
        let mut ordered: Vec<(usize, &Bin)> = bins.iter().enumerate().collect();
        if self.config.bin_order == BinOrder::VolumeAscending {
            ordered.sort_by_key(|(_, bin)| bin.volume());
        }
        ordered
    }

    /// Packs `items` into a fresh copy of `bin`, or returns `None` at the first
    /// item that does not fit.
    fn run_trial(bin: &Bin, items: &[&Item]) -> Option<Bin> {
        let mut trial = bin.emptied();

        for (i, item) in items.iter().enumerate() {
            if !trial.put_item(item) {
                log::debug!(
                    "bin '{}' rejected: item {} of {} ('{}') could not be placed",
                    bin.name(),
                    i + 1,
                    items.len(),
                    item.name()
                );
                return None;
            }
        }

        Some(trial)
    }
}

impl Solver for Packer3D {
    type Item = Item;
    type Bin = Bin;

    fn solve(&self, bins: &[Bin], items: &[Item]) -> Result<SolveResult<Bin>> {
        let start = Instant::now();

        let items = self.ordered_items(items);
        let bins = self.ordered_bins(bins);

        let try_bin = |(position, &(index, bin)): (usize, &(usize, &Bin))| {
            Self::run_trial(bin, &items).map(|packed| (position, index, packed))
        };

        // `find_map_first` keeps the lowest position, so parallel runs pick
        // the same bin as sequential ones.
        let found = if self.config.parallel_trials {
            bins.par_iter().enumerate().find_map_first(try_bin)
        } else {
            bins.iter().enumerate().find_map(try_bin)
        };

        let Some((position, bin_index, bin)) = found else {
            log::debug!("no bin fits all {} items", items.len());
            return Err(Error::NoFittingBin {
                bins: bins.len(),
                items: items.len(),
            });
        };

        log::debug!(
            "packed {} items into '{}' (bin {}, trial {})",
            bin.items().len(),
            bin.name(),
            bin_index,
            position + 1
        );

        let summary = bin.summary();
        Ok(SolveResult {
            bin,
            bin_index,
            trials: position + 1,
            computation_time_ms: start.elapsed().as_millis() as u64,
            summary,
        })
    }
}
