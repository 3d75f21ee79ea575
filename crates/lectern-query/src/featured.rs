use lectern_core::Listing;

/// A page partitioned into the lead item and the grid below it.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedSplit<'a, T> {
    pub featured: Option<&'a T>,
    pub regular: Vec<&'a T>,
}

impl<'a, T: Listing> FeaturedSplit<'a, T> {
    /// The featured item when it also carries the urgent flag.
    pub fn urgent(&self) -> Option<&'a T> {
        self.featured.filter(|f| f.is_urgent())
    }
}

/// Pull the first featured item out of `results`, keeping the rest in order.
/// Later featured items stay in `regular`.
pub fn split_featured<'a, T: Listing>(results: &[&'a T]) -> FeaturedSplit<'a, T> {
    let lead = results.iter().position(|item| item.is_featured());
    let featured = lead.map(|i| results[i]);
    let regular = results
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != lead)
        .map(|(_, item)| *item)
        .collect();
    FeaturedSplit { featured, regular }
}
