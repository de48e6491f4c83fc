//! A numeric array whose dimensions can be indexed by name.
//!
//! Observation fields are dense integer tensors whose axes often have
//! semantic labels (the rows of the player vector, the layers of a feature
//! stack). [`NamedArray`] carries an optional name→index map per dimension
//! and keeps those maps consistent through row selection and slicing, so
//! `arr.value_of("minerals")` and `arr.value(1)` always agree.
//!
//! Elements are `i64` throughout: wide enough for unit tags, and every
//! observation scalar is integral on the wire.

use indexmap::IndexMap;

use crate::error::NamedArrayError;

/// One index into one dimension: by position or by name.
#[derive(Clone, Copy, Debug)]
pub enum Idx<'a> {
    /// A positional index.
    Pos(usize),
    /// A lookup in the dimension's name map.
    Name(&'a str),
}

impl From<usize> for Idx<'_> {
    fn from(i: usize) -> Self {
        Idx::Pos(i)
    }
}

impl<'a> From<&'a str> for Idx<'a> {
    fn from(n: &'a str) -> Self {
        Idx::Name(n)
    }
}

/// A dense row-major `i64` array with optional per-dimension name maps.
///
/// Invariant: every named dimension's map has exactly one entry per index,
/// and every derived array (row, slice, selection) re-derives a map that
/// stays consistent with its new shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedArray {
    data: Vec<i64>,
    shape: Vec<usize>,
    names: Vec<Option<IndexMap<String, usize>>>,
}

fn build_map(dim: usize, len: usize, list: &[&str]) -> Result<IndexMap<String, usize>, NamedArrayError> {
    if list.len() != len {
        return Err(NamedArrayError::NameCountMismatch {
            dim,
            expected: len,
            actual: list.len(),
        });
    }
    let mut map = IndexMap::with_capacity(list.len());
    for (i, name) in list.iter().enumerate() {
        if map.insert((*name).to_string(), i).is_some() {
            return Err(NamedArrayError::DuplicateName {
                name: (*name).to_string(),
            });
        }
    }
    Ok(map)
}

impl NamedArray {
    /// Build an array with no name maps at all.
    ///
    /// For fields whose axes have no semantic labels (alert lists, control
    /// group tables). Named construction deliberately rejects the all-unnamed
    /// case to push callers here.
    pub fn unnamed(data: Vec<i64>, shape: &[usize]) -> Result<Self, NamedArrayError> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(NamedArrayError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            shape: shape.to_vec(),
            names: vec![None; shape.len()],
        })
    }

    /// Build an array with one optional name list per dimension.
    ///
    /// Fails if the name lists don't line up with the shape, if a name
    /// repeats within a dimension, or if no dimension is named at all.
    pub fn with_names(
        data: Vec<i64>,
        shape: &[usize],
        names: &[Option<&[&str]>],
    ) -> Result<Self, NamedArrayError> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(NamedArrayError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        if names.len() != shape.len() {
            return Err(NamedArrayError::DimensionCountMismatch {
                expected: shape.len(),
                actual: names.len(),
            });
        }
        if names.iter().all(Option::is_none) {
            return Err(NamedArrayError::NoNames);
        }
        let mut maps = Vec::with_capacity(names.len());
        for (dim, list) in names.iter().enumerate() {
            maps.push(match list {
                Some(list) => Some(build_map(dim, shape[dim], list)?),
                None => None,
            });
        }
        Ok(Self {
            data,
            shape: shape.to_vec(),
            names: maps,
        })
    }

    /// Build a fully-named 1-D array.
    pub fn vector(data: Vec<i64>, names: &[&str]) -> Result<Self, NamedArrayError> {
        let len = data.len();
        Self::with_names(data, &[len], &[Some(names)])
    }

    /// The array's shape.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Length of the first dimension (0 for a zero-dimensional array).
    pub fn len(&self) -> usize {
        self.shape.first().copied().unwrap_or(0)
    }

    /// Whether the first dimension is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The flat row-major data.
    pub fn data(&self) -> &[i64] {
        &self.data
    }

    /// The names of one dimension in index order, if that dimension is named.
    pub fn dim_names(&self, dim: usize) -> Option<Vec<&str>> {
        self.names.get(dim)?.as_ref().map(|map| {
            let mut pairs: Vec<(&str, usize)> =
                map.iter().map(|(n, &i)| (n.as_str(), i)).collect();
            pairs.sort_by_key(|&(_, i)| i);
            pairs.into_iter().map(|(n, _)| n).collect()
        })
    }

    /// Resolve a name to its index within one dimension.
    pub fn index_of(&self, dim: usize, name: &str) -> Result<usize, NamedArrayError> {
        let map = self
            .names
            .get(dim)
            .and_then(Option::as_ref)
            .ok_or(NamedArrayError::UnnamedAxis { dim })?;
        map.get(name)
            .copied()
            .ok_or_else(|| NamedArrayError::UnknownName {
                name: name.to_string(),
            })
    }

    fn resolve(&self, dim: usize, idx: Idx<'_>) -> Result<usize, NamedArrayError> {
        let i = match idx {
            Idx::Pos(i) => i,
            Idx::Name(n) => self.index_of(dim, n)?,
        };
        if i >= self.shape[dim] {
            return Err(NamedArrayError::IndexOutOfBounds {
                dim,
                index: i,
                len: self.shape[dim],
            });
        }
        Ok(i)
    }

    fn strides(&self) -> Vec<usize> {
        let mut strides = vec![1usize; self.shape.len()];
        for dim in (0..self.shape.len().saturating_sub(1)).rev() {
            strides[dim] = strides[dim + 1] * self.shape[dim + 1];
        }
        strides
    }

    /// Read one element by fully indexing every dimension.
    ///
    /// Each index may be positional or by name; mixing is fine.
    pub fn get(&self, indices: &[Idx<'_>]) -> Result<i64, NamedArrayError> {
        if indices.len() != self.shape.len() {
            return Err(NamedArrayError::DimensionCountMismatch {
                expected: self.shape.len(),
                actual: indices.len(),
            });
        }
        let strides = self.strides();
        let mut flat = 0usize;
        for (dim, idx) in indices.iter().enumerate() {
            flat += self.resolve(dim, *idx)? * strides[dim];
        }
        Ok(self.data[flat])
    }

    /// Read one element of a 1-D array by position.
    pub fn value(&self, index: usize) -> Result<i64, NamedArrayError> {
        self.get(&[Idx::Pos(index)])
    }

    /// Read one element of a 1-D array by name, the direct-attribute form.
    pub fn value_of(&self, name: &str) -> Result<i64, NamedArrayError> {
        self.get(&[Idx::Name(name)])
    }

    /// Select a single index along one dimension, dropping that axis.
    ///
    /// The remaining dimensions keep their name maps, so repeated selection
    /// is the multi-axis indexing form: `a.select(0, i)?.select(0, j)?`.
    pub fn select(&self, dim: usize, idx: Idx<'_>) -> Result<Self, NamedArrayError> {
        if dim >= self.shape.len() {
            return Err(NamedArrayError::IndexOutOfBounds {
                dim,
                index: dim,
                len: self.shape.len(),
            });
        }
        let i = self.resolve(dim, idx)?;
        let strides = self.strides();
        let mut shape = self.shape.clone();
        shape.remove(dim);
        let mut names = self.names.clone();
        names.remove(dim);

        let outer: usize = self.shape[..dim].iter().product();
        let inner: usize = strides[dim];
        let block = self.shape[dim] * inner;
        let mut data = Vec::with_capacity(outer * inner);
        for o in 0..outer {
            let start = o * block + i * inner;
            data.extend_from_slice(&self.data[start..start + inner]);
        }
        Ok(Self { data, shape, names })
    }

    /// Index the first dimension, returning the row with its remaining maps.
    pub fn row(&self, idx: Idx<'_>) -> Result<Self, NamedArrayError> {
        self.select(0, idx)
    }

    /// Slice the first dimension, re-deriving its name map.
    ///
    /// Names that survive the slice are re-indexed from zero in their
    /// original order; names outside the range are dropped.
    pub fn slice_rows(&self, start: usize, end: usize) -> Result<Self, NamedArrayError> {
        if self.shape.is_empty() {
            return Err(NamedArrayError::IndexOutOfBounds {
                dim: 0,
                index: start,
                len: 0,
            });
        }
        let len = self.len();
        let end = end.min(len);
        let start = start.min(end);
        let row: usize = self.shape[1..].iter().product();
        let data = self.data[start * row..end * row].to_vec();
        let mut shape = self.shape.clone();
        shape[0] = end - start;

        let mut names = self.names.clone();
        if let Some(map) = &self.names[0] {
            let mut pairs: Vec<(&String, usize)> =
                map.iter().map(|(n, &i)| (n, i)).collect();
            pairs.sort_by_key(|&(_, i)| i);
            let sliced: IndexMap<String, usize> = pairs
                .into_iter()
                .filter(|&(_, i)| i >= start && i < end)
                .enumerate()
                .map(|(new, (n, _))| (n.clone(), new))
                .collect();
            names[0] = Some(sliced);
        }
        Ok(Self { data, shape, names })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn abc() -> NamedArray {
        NamedArray::vector(vec![1, 3, 6], &["a", "b", "c"]).unwrap()
    }

    #[test]
    fn one_dimensional_access() {
        let a = abc();
        assert_eq!(a.value_of("a").unwrap(), 1);
        assert_eq!(a.value(1).unwrap(), 3);
        assert_eq!(a.value_of("c").unwrap(), 6);
        assert!(matches!(
            a.value_of("d"),
            Err(NamedArrayError::UnknownName { .. })
        ));
    }

    #[test]
    fn named_first_dimension() {
        let b = NamedArray::with_names(
            vec![1, 3, 6, 8],
            &[2, 2],
            &[Some(&["a", "b"]), None],
        )
        .unwrap();
        assert_eq!(b.row("a".into()).unwrap().data(), &[1, 3]);
        assert_eq!(b.row(Idx::Pos(1)).unwrap().data(), &[6, 8]);
        assert_eq!(b.get(&["a".into(), 1usize.into()]).unwrap(), 3);
    }

    #[test]
    fn named_second_dimension() {
        let c = NamedArray::with_names(
            vec![1, 3, 6, 8],
            &[2, 2],
            &[None, Some(&["a", "b"])],
        )
        .unwrap();
        assert_eq!(c.row(Idx::Pos(0)).unwrap().value_of("a").unwrap(), 1);
        assert_eq!(c.get(&[1usize.into(), "b".into()]).unwrap(), 8);
        assert!(matches!(
            c.get(&["a".into(), Idx::Pos(0)]),
            Err(NamedArrayError::UnnamedAxis { dim: 0 })
        ));
    }

    #[test]
    fn construction_rejects_bad_names() {
        assert!(matches!(
            NamedArray::vector(vec![1, 2, 3], &["a", "b"]),
            Err(NamedArrayError::NameCountMismatch { .. })
        ));
        assert!(matches!(
            NamedArray::with_names(vec![1, 2], &[2], &[None]),
            Err(NamedArrayError::NoNames)
        ));
        assert!(matches!(
            NamedArray::vector(vec![1, 2], &["a", "a"]),
            Err(NamedArrayError::DuplicateName { .. })
        ));
        assert!(matches!(
            NamedArray::with_names(vec![1, 2], &[2], &[Some(&["a", "b"][..]), None]),
            Err(NamedArrayError::DimensionCountMismatch { .. })
        ));
        assert!(matches!(
            NamedArray::unnamed(vec![1, 2, 3], &[2, 2]),
            Err(NamedArrayError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn slicing_rederives_names() {
        let a = NamedArray::vector(vec![10, 20, 30, 40], &["w", "x", "y", "z"]).unwrap();
        let s = a.slice_rows(1, 3).unwrap();
        assert_eq!(s.shape(), &[2]);
        assert_eq!(s.value_of("x").unwrap(), 20);
        assert_eq!(s.value_of("y").unwrap(), 30);
        assert!(s.value_of("w").is_err());
        assert_eq!(s.index_of(0, "y").unwrap(), 1);
    }

    #[test]
    fn select_drops_axis_and_keeps_other_maps() {
        // Shape [2, 3] with both axes named.
        let a = NamedArray::with_names(
            vec![1, 2, 3, 4, 5, 6],
            &[2, 3],
            &[Some(&["p", "q"]), Some(&["x", "y", "z"])],
        )
        .unwrap();
        let col = a.select(1, "y".into()).unwrap();
        assert_eq!(col.shape(), &[2]);
        assert_eq!(col.value_of("p").unwrap(), 2);
        assert_eq!(col.value_of("q").unwrap(), 5);
        let row = a.select(0, "q".into()).unwrap();
        assert_eq!(row.value_of("z").unwrap(), 6);
    }

    proptest! {
        #[test]
        fn name_and_position_agree(len in 1usize..12, pick in 0usize..12) {
            prop_assume!(pick < len);
            let names: Vec<String> = (0..len).map(|i| format!("n{i}")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let data: Vec<i64> = (0..len as i64).map(|i| i * 7).collect();
            let arr = NamedArray::vector(data, &refs).unwrap();
            let name = &refs[pick];
            prop_assert_eq!(
                arr.value_of(name).unwrap(),
                arr.value(arr.index_of(0, name).unwrap()).unwrap()
            );
        }

        #[test]
        fn slicing_preserves_agreement(
            len in 2usize..12,
            start in 0usize..6,
            keep in 1usize..6,
        ) {
            prop_assume!(start + keep <= len);
            let names: Vec<String> = (0..len).map(|i| format!("n{i}")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let data: Vec<i64> = (0..len as i64).collect();
            let arr = NamedArray::vector(data, &refs).unwrap();
            let sliced = arr.slice_rows(start, start + keep).unwrap();
            for name in &refs[start..start + keep] {
                let idx = sliced.index_of(0, name).unwrap();
                prop_assert_eq!(
                    sliced.value_of(name).unwrap(),
                    sliced.value(idx).unwrap()
                );
                prop_assert_eq!(sliced.value_of(name).unwrap(), arr.value_of(name).unwrap());
            }
        }
    }
}
