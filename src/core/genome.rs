//! Genome capability traits.
//!
//! Operators and evaluators never inspect a genome directly. They are
//! written against one of two capabilities, chosen once when the genome
//! type is defined:
//!
//! - [`FixedWidthGenome`]: a statically sized container (array or tuple)
//!   whose genes can be compared and swapped position by position.
//! - [`SequenceGenome`]: a variable-length sequence (string, vector) that
//!   can be read as a slice of genes and rebuilt from one.

use std::borrow::Cow;

/// A genome with a fixed number of independently swappable positions.
///
/// Implemented for arrays `[T; N]` and for tuples of up to eight
/// elements. Positions of a tuple may have different types; the only
/// requirement is that each one is comparable and cloneable.
pub trait FixedWidthGenome: Clone + Send + Sync {
    /// Number of gene positions.
    const ARITY: usize;

    /// Exchanges the gene at `index` with the same position of `other`.
    ///
    /// # Panics
    /// Panics if `index >= ARITY`.
    fn swap_gene(&mut self, other: &mut Self, index: usize);

    /// Returns whether both genomes hold equal genes at `index`.
    ///
    /// # Panics
    /// Panics if `index >= ARITY`.
    fn gene_eq(&self, other: &Self, index: usize) -> bool;
}

impl<T, const N: usize> FixedWidthGenome for [T; N]
where
    T: Clone + PartialEq + Send + Sync,
{
    const ARITY: usize = N;

    fn swap_gene(&mut self, other: &mut Self, index: usize) {
        std::mem::swap(&mut self[index], &mut other[index]);
    }

    fn gene_eq(&self, other: &Self, index: usize) -> bool {
        self[index] == other[index]
    }
}

macro_rules! impl_fixed_width_tuple {
    ($arity:expr; $($idx:tt => $T:ident),+) => {
        impl<$($T),+> FixedWidthGenome for ($($T,)+)
        where
            $($T: Clone + PartialEq + Send + Sync),+
        {
            const ARITY: usize = $arity;

            fn swap_gene(&mut self, other: &mut Self, index: usize) {
                match index {
                    $($idx => std::mem::swap(&mut self.$idx, &mut other.$idx),)+
                    _ => panic!("gene index {} out of range for arity {}", index, $arity),
                }
            }

            fn gene_eq(&self, other: &Self, index: usize) -> bool {
                match index {
                    $($idx => self.$idx == other.$idx,)+
                    _ => panic!("gene index {} out of range for arity {}", index, $arity),
                }
            }
        }
    };
}

impl_fixed_width_tuple!(1; 0 => A);
impl_fixed_width_tuple!(2; 0 => A, 1 => B);
impl_fixed_width_tuple!(3; 0 => A, 1 => B, 2 => C);
impl_fixed_width_tuple!(4; 0 => A, 1 => B, 2 => C, 3 => D);
impl_fixed_width_tuple!(5; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
impl_fixed_width_tuple!(6; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => G);
impl_fixed_width_tuple!(7; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => G, 6 => H);
impl_fixed_width_tuple!(8; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => G, 6 => H, 7 => I);

/// A genome of variable length.
///
/// Implemented for `String` (genes are `char`s) and `Vec<T>`.
pub trait SequenceGenome: Clone + Send + Sync {
    /// The element type.
    type Gene: Clone + PartialEq + Send + Sync;

    /// Views the genome as a slice of genes.
    ///
    /// Borrowed when the genome is already stored as a slice, owned
    /// otherwise (a `String` is decoded into `char`s).
    fn genes(&self) -> Cow<'_, [Self::Gene]>;

    /// Rebuilds a genome from genes.
    fn from_genes(genes: Vec<Self::Gene>) -> Self;

    /// Number of genes.
    fn gene_count(&self) -> usize {
        self.genes().len()
    }
}

impl SequenceGenome for String {
    type Gene = char;

    fn genes(&self) -> Cow<'_, [char]> {
        Cow::Owned(self.chars().collect())
    }

    fn from_genes(genes: Vec<char>) -> Self {
        genes.into_iter().collect()
    }

    fn gene_count(&self) -> usize {
        self.chars().count()
    }
}

impl<T> SequenceGenome for Vec<T>
where
    T: Clone + PartialEq + Send + Sync,
{
    type Gene = T;

    fn genes(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self.as_slice())
    }

    fn from_genes(genes: Vec<T>) -> Self {
        genes
    }

    fn gene_count(&self) -> usize {
        self.len()
    }
}
