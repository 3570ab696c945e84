//! Candidate sequence enumeration.
//!
//! A candidate sequence picks exactly one destination from each region,
//! in region order. Enumeration is the Cartesian product of the region
//! destination lists, ordered lexicographically (region order, then
//! within-region list order) so results are reproducible.

use crate::domain::Iata;

use super::config::Region;

/// Enumerate every candidate destination sequence.
///
/// Returns sequences in lexicographic order. An empty region list
/// yields no candidates; a region with no destinations makes the whole
/// product empty.
pub fn enumerate_sequences(regions: &[Region]) -> Vec<Vec<Iata>> {
    if regions.is_empty() {
        return Vec::new();
    }

    let mut sequences = vec![Vec::with_capacity(regions.len())];

    for region in regions {
        let mut next = Vec::with_capacity(sequences.len() * region.destinations.len());
        for sequence in &sequences {
            for destination in &region.destinations {
                let mut extended = sequence.clone();
                extended.push(*destination);
                next.push(extended);
            }
        }
        sequences = next;
    }

    sequences
}

/// The number of sequences `enumerate_sequences` will produce.
pub fn sequence_count(regions: &[Region]) -> usize {
    if regions.is_empty() {
        return 0;
    }
    regions.iter().map(|r| r.destinations.len()).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn region(name: &str, codes: &[&str]) -> Region {
        Region::new(name, codes.iter().map(|c| iata(c)).collect())
    }

    #[test]
    fn empty_region_list_yields_nothing() {
        assert!(enumerate_sequences(&[]).is_empty());
        assert_eq!(sequence_count(&[]), 0);
    }

    #[test]
    fn single_singleton_region() {
        let regions = vec![region("A", &["SCL"])];
        let sequences = enumerate_sequences(&regions);

        assert_eq!(sequences, vec![vec![iata("SCL")]]);
        assert_eq!(sequence_count(&regions), 1);
    }

    #[test]
    fn product_is_lexicographic() {
        let regions = vec![region("A", &["AAA", "BBB"]), region("B", &["CCC", "DDD"])];

        let sequences = enumerate_sequences(&regions);

        assert_eq!(
            sequences,
            vec![
                vec![iata("AAA"), iata("CCC")],
                vec![iata("AAA"), iata("DDD")],
                vec![iata("BBB"), iata("CCC")],
                vec![iata("BBB"), iata("DDD")],
            ]
        );
    }

    #[test]
    fn size_is_product_of_region_sizes() {
        let regions = vec![
            region("A", &["AAA"]),
            region("B", &["BBB", "CCC", "DDD"]),
            region("C", &["EEE", "FFF"]),
        ];

        assert_eq!(enumerate_sequences(&regions).len(), 6);
        assert_eq!(sequence_count(&regions), 6);
    }

    #[test]
    fn region_with_no_destinations_empties_product() {
        let regions = vec![region("A", &["AAA"]), region("B", &[])];

        assert!(enumerate_sequences(&regions).is_empty());
        assert_eq!(sequence_count(&regions), 0);
    }

    #[test]
    fn every_sequence_has_one_destination_per_region() {
        let regions = vec![
            region("A", &["AAA", "BBB"]),
            region("B", &["CCC"]),
            region("C", &["DDD", "EEE", "FFF"]),
        ];

        for sequence in enumerate_sequences(&regions) {
            assert_eq!(sequence.len(), regions.len());
            for (slot, region) in sequence.iter().zip(&regions) {
                assert!(region.destinations.contains(slot));
            }
        }
    }

    #[test]
    fn default_config_enumeration_size() {
        let config = crate::planner::PlannerConfig::default();

        // 1 * 6 * 5 * 2 * 3 * 1
        assert_eq!(sequence_count(&config.regions), 180);
        assert_eq!(enumerate_sequences(&config.regions).len(), 180);
    }
}
