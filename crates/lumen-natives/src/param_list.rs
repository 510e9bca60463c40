//! Ordered parameter lists with positional fallback names.

use crate::invariants;
use crate::param::Parameter;

/// Parameters in declaration order.
///
/// `idlist` is a comma separated list of names used for parameters that are
/// not tied to an identifier.
#[derive(Clone, Debug, Default)]
pub struct ParameterList {
    params: Vec<Parameter>,
    idlist: String,
}

impl ParameterList {
    pub fn new(idlist: impl Into<String>) -> Self {
        Self {
            params: Vec::new(),
            idlist: idlist.into(),
        }
    }

    /// A list of `len` default parameters.
    pub fn with_len(len: usize, idlist: impl Into<String>) -> Self {
        Self {
            params: vec![Parameter::default(); len],
            idlist: idlist.into(),
        }
    }

    pub fn idlist(&self) -> &str {
        &self.idlist
    }

    /// Name of parameter `i`.
    ///
    /// Uses the parameter's identifier when it has a live one, otherwise the
    /// `i`-th entry of the fallback list.
    ///
    /// # Panics
    /// Panics if the fallback list has fewer than `i + 1` entries.
    pub fn name_of(&self, i: usize) -> String {
        if let Some(ident) = self.params.get(i).and_then(Parameter::ident) {
            return ident.name.clone();
        }
        match self.idlist.split(',').nth(i) {
            Some(name) => name.to_owned(),
            None => invariants::idlist_too_short(&self.idlist, i),
        }
    }

    /// Append `param` unless a parameter tied to the same identifier is
    /// already present. Returns whether it was appended.
    pub fn append(&mut self, param: Parameter) -> bool {
        if self.params.iter().any(|p| p.same_ident(&param)) {
            return false;
        }
        self.params.push(param);
        true
    }

    /// Append unconditionally.
    pub fn push(&mut self, param: Parameter) {
        self.params.push(param);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Parameter> {
        self.params.get(i)
    }

    pub(crate) fn get_mut(&mut self, i: usize) -> &mut Parameter {
        &mut self.params[i]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.params.iter()
    }

    pub fn as_slice(&self) -> &[Parameter] {
        &self.params
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
