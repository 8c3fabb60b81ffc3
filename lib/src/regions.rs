//! The static region/AMI table the fleet is launched from.

/// AWS regions mapped to the Ubuntu AMI published for each of them.
///
/// The table is kept in sorted key order and that order is load-bearing:
/// node ids, peer lists and `depends_on` lists are all derived by walking
/// it front to back.
pub const AWS_REGIONS: &[(&str, &str)] = &[
    // Capetown
    ("af_south_1", "ami-0e878fcddf2937686"),
    // Hong Kong
    ("ap_east_1", "ami-0d96ec8a788679eb2"),
    // Tokio
    ("ap_northeast_1", "ami-07c589821f2b353aa"),
    // Seoul
    ("ap_northeast_2", "ami-0f3a440bbcff3d043"),
    // Osaka
    ("ap_northeast_3", "ami-05ff0b3a7128cd6f8"),
    // Mumbai
    ("ap_south_1", "ami-03f4878755434977f"),
    // Hydrabad
    ("ap_south_2", "ami-0bbc2f7f6287d5ca6"),
    // Singapore
    ("ap_southeast_1", "ami-0fa377108253bf620"),
    // Sydney
    ("ap_southeast_2", "ami-04f5097681773b989"),
    // Jakarta
    ("ap_southeast_3", "ami-02157887724ade8ba"),
    // Canada
    ("ca_central_1", "ami-0a2e7efb4257c0907"),
    // Frankfurt
    ("eu_central_1", "ami-0faab6bdbac9486fb"),
    // Stockholm
    ("eu_north_1", "ami-0014ce3e52359afbd"),
    // Milan
    ("eu_south_1", "ami-056bb2662ef466553"),
    // Spain
    ("eu_south_2", "ami-0a9e7160cebfd8c12"),
    // Ireland
    ("eu_west_1", "ami-0905a3c97561e0b69"),
    // London
    ("eu_west_2", "ami-0e5f882be1900e43b"),
    // Paris
    ("eu_west_3", "ami-01d21b7be69801c2f"),
    // UAE
    ("me_central_1", "ami-0b98fa71853d8d270"),
    // Bahrain
    ("me_south_1", "ami-0ce1025465c85da8d"),
    // Sao Paolo
    ("sa_east_1", "ami-0fb4cf3a99aa89f72"),
    // N. Virgina
    ("us_east_1", "ami-0c7217cdde317cfec"),
    // Ohio
    ("us_east_2", "ami-05fb0b8c1424f266b"),
    // N. Cali
    ("us_west_1", "ami-0ce2cb35386fc22e9"),
    // Oregon
    ("us_west_2", "ami-008fe2fc65df48dac"),
];

/// An immutable region table handed to the generator at startup.
#[derive(Debug, Clone, Copy)]
pub struct RegionTable {
    entries: &'static [(&'static str, &'static str)],
}

impl RegionTable {
    /// The full AWS table shipped with the tool.
    pub fn aws() -> Self {
        Self::new(AWS_REGIONS)
    }

    /// Wrap a custom table. Entries must already be in sorted key order.
    pub fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
        RegionTable { entries }
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    /// Region codes in sorted order.
    pub fn regions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(region, _)| *region)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_covers_all_regions() {
        assert_eq!(RegionTable::aws().len(), 25);
    }

    #[test]
    fn test_table_is_sorted_and_unique() {
        assert!(AWS_REGIONS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_regions_iterates_in_table_order() {
        let table = RegionTable::aws();
        let first: Vec<&str> = table.regions().take(2).collect();
        assert_eq!(first, vec!["af_south_1", "ap_east_1"]);
    }
}
