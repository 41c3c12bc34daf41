//! Recursive generator for random data trees.

use crate::{config::*, error::*, keys::*, node::*};
use rand::{CryptoRng, Rng};
use regex::Regex;
use tracing::debug;

/// The kinds of value a slot can be filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Primitive,
    Mapping,
    Callable,
    Sequence,
    Complex,
}

impl ValueKind {
    /// Kinds enabled by `config`, in selection order.
    ///
    /// Primitives and mappings are always available.
    pub fn enabled(config: &GenerationConfig) -> Vec<ValueKind> {
        let mut kinds = vec![ValueKind::Primitive, ValueKind::Mapping];
        if config.functions {
            kinds.push(ValueKind::Callable);
        }
        if config.arrays {
            kinds.push(ValueKind::Sequence);
        }
        if config.complex_types {
            kinds.push(ValueKind::Complex);
        }
        kinds
    }

    /// Pick one enabled kind uniformly.
    pub fn choose<R>(rng: &mut R, config: &GenerationConfig) -> ValueKind
    where
        R: Rng + ?Sized,
    {
        // Never empty: primitives and mappings are always enabled.
        let kinds = Self::enabled(config);
        kinds[rng.gen_range(0..kinds.len())]
    }
}

/// Generator for random trees rooted at a [`Mapping`].
///
/// A generator holds a resolved config and is reusable: every call to
/// [`Generator::generate`] produces a fresh, independent tree.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GenerationConfig,
    pattern: Regex,
}

impl Generator {
    /// Create a new generator for the given config.
    pub fn new(config: GenerationConfig) -> Result<Self> {
        Ok(Generator {
            config,
            pattern: ComplexValue::example_pattern()?,
        })
    }

    /// Resolve `options` and create a generator for the result.
    pub fn from_options(options: &GenerationOptions) -> Result<Self> {
        Self::new(options.resolve()?)
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate a tree using the thread-local RNG.
    pub fn generate(&self) -> Result<Mapping> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate a tree drawing from the given RNG.
    pub fn generate_with<R>(&self, rng: &mut R) -> Result<Mapping>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        debug!(config = %self.config, "generating tree");
        let tree = self.build_mapping(rng, self.config)?;
        debug!(
            children = tree.len(),
            nodes = tree.count_nodes(),
            "tree generated"
        );
        Ok(tree)
    }

    fn build_mapping<R>(&self, rng: &mut R, config: GenerationConfig) -> Result<Mapping>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        let mut mapping = Mapping::new();
        if config.is_exhausted() {
            return Ok(mapping);
        }

        let num_children = rng.gen_range(0..=config.max_breadth);
        for _ in 0..num_children {
            // Height drops inside the child's own construction, not per sibling.
            let value = self.build_value(rng, config)?;

            let placement = if config.shared_store && rng.gen_bool(0.5) {
                Placement::Shared
            } else {
                Placement::Own
            };
            let key = unique_key(rng, |candidate| mapping.contains_in(placement, candidate))?;
            mapping.insert(placement, key, value);
        }

        Ok(mapping)
    }

    fn build_value<R>(&self, rng: &mut R, config: GenerationConfig) -> Result<Node>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        if config.is_exhausted() {
            return Ok(Node::Primitive(Primitive::Absent));
        }

        let node = match ValueKind::choose(rng, &config) {
            ValueKind::Primitive => Node::Primitive(random_primitive(rng)),
            ValueKind::Mapping => Node::Mapping(self.build_mapping(rng, config.reduced_height())?),
            ValueKind::Sequence => Node::Sequence(self.build_sequence(rng, config)?),
            ValueKind::Callable => Node::Callable(Callable),
            ValueKind::Complex => Node::Complex(self.random_complex(rng)),
        };
        Ok(node)
    }

    /// Elements are built one level lower than mapping children at the same level.
    fn build_sequence<R>(&self, rng: &mut R, config: GenerationConfig) -> Result<Vec<Node>>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        let len = rng.gen_range(0..=config.max_breadth);
        let lower = config.reduced_height();
        if lower.is_exhausted() {
            return Ok(Vec::new());
        }

        (0..len).map(|_| self.build_value(rng, lower)).collect()
    }

    fn random_complex<R>(&self, rng: &mut R) -> ComplexValue
    where
        R: Rng + CryptoRng + ?Sized,
    {
        match rng.gen_range(0..3) {
            0 => ComplexValue::timestamp_from_millis(rng.gen()),
            1 => ComplexValue::Pattern(self.pattern.clone()),
            _ => ComplexValue::Error(FixtureError::example()),
        }
    }
}

fn random_primitive<R>(rng: &mut R) -> Primitive
where
    R: Rng + CryptoRng + ?Sized,
{
    match rng.gen_range(0..4) {
        0 => Primitive::String(random_string(rng)),
        1 => Primitive::Number(rng.gen_range(0.0..10.0)),
        2 => Primitive::Absent,
        _ => Primitive::Boolean(rng.gen()),
    }
}

/// Generate one tree from optional caller options.
///
/// Missing options, or missing fields within them, fall back to the defaults
/// of [`GenerationConfig`]. The options are only read.
pub fn generate(options: Option<&GenerationOptions>) -> Result<Mapping> {
    let config = match options {
        Some(options) => options.resolve()?,
        None => GenerationConfig::default(),
    };
    Generator::new(config)?.generate()
}
