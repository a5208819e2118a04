use super::question::OPTION_COUNT;

bitflags::bitflags! {
    /// Options currently eliminated by the cards lifeline.
    ///
    /// Bit `n` is set when option `n` is hidden. The correct option is never
    /// part of the set.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct HiddenOptions: u8 {
        const A = 1 << 0;
        const B = 1 << 1;
        const C = 1 << 2;
        const D = 1 << 3;
    }
}

impl HiddenOptions {
    /// Flag for a single option index, `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < OPTION_COUNT).then(|| Self::from_bits_truncate(1 << index))
    }

    pub fn hides(&self, index: usize) -> bool {
        Self::from_index(index).is_some_and(|flag| self.contains(flag))
    }

    pub fn hide(&mut self, index: usize) {
        if let Some(flag) = Self::from_index(index) {
            self.insert(flag);
        }
    }

    pub fn count(&self) -> usize {
        self.bits().count_ones() as usize
    }

    /// Hidden option indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..OPTION_COUNT).filter(move |&index| self.hides(index))
    }
}

impl FromIterator<usize> for HiddenOptions {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut hidden = Self::empty();
        for index in iter {
            hidden.hide(index);
        }
        hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_out_of_range_indices() {
        let hidden: HiddenOptions = [1, 3, 7].into_iter().collect();
        assert_eq!(hidden, HiddenOptions::B | HiddenOptions::D);
        assert_eq!(hidden.count(), 2);
        assert!(!hidden.hides(7));
    }

    #[test]
    fn indices_are_ascending() {
        let hidden = HiddenOptions::D | HiddenOptions::A;
        assert_eq!(hidden.indices().collect::<Vec<_>>(), vec![0, 3]);
    }
}
