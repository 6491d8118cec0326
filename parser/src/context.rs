use crate::{
    constants::api_constant,
    enums::StructureType,
    error::VkJsonError,
    traits::FromJson,
    utils::{is_identifier, json_kind, parse_integer_literal, quote},
};
use lazy_static::lazy_static;
use serde_json::{Map, Value};
use std::{cell::RefCell, fmt::Display};
use vksc_json_arena::BumpArena;

static NULL: Value = Value::Null;

lazy_static! {
    static ref EMPTY_OBJECT: Map<String, Value> = Map::new();
}

/// How forgiving the parser is with malformed input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail on input that is otherwise ignored with a warning: unknown
    /// enumerant or flag names, array lengths that disagree with their count
    /// member, and `sType` values that do not match the structure.
    pub strict: bool,
}

impl ParseOptions {
    pub fn strict() -> ParseOptions {
        ParseOptions { strict: true }
    }

    pub fn lenient() -> ParseOptions {
        ParseOptions { strict: false }
    }
}

/// State shared by every [`FromJson`] conversion of one document: the arena
/// receiving the results, the options, and the path of the value currently
/// being converted.
pub struct Context<'a> {
    arena:   &'a BumpArena,
    options: ParseOptions,
    xpath:   RefCell<String>,
}

impl<'a> Context<'a> {
    pub fn new(arena: &'a BumpArena, options: ParseOptions) -> Context<'a> {
        Context {
            arena,
            options,
            xpath: RefCell::new(String::new()),
        }
    }

    pub fn arena(&self) -> &'a BumpArena {
        self.arena
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// JSON path of the value being converted, e.g. `$.pStages[1].pName`.
    pub fn xpath(&self) -> String {
        format!("${}", self.xpath.borrow())
    }

    /// Runs `f` with `.key` appended to the current path.
    pub fn in_field<T>(
        &self,
        key: &str,
        f: impl FnOnce(&Self) -> Result<T, VkJsonError>,
    ) -> Result<T, VkJsonError> {
        let len = self.xpath.borrow().len();
        {
            let mut xpath = self.xpath.borrow_mut();
            xpath.push('.');
            xpath.push_str(key);
        }
        let result = f(self);
        self.xpath.borrow_mut().truncate(len);
        result
    }

    /// Runs `f` with `[index]` appended to the current path.
    pub fn in_element<T>(
        &self,
        index: usize,
        f: impl FnOnce(&Self) -> Result<T, VkJsonError>,
    ) -> Result<T, VkJsonError> {
        let len = self.xpath.borrow().len();
        self.xpath.borrow_mut().push_str(&format!("[{}]", index));
        let result = f(self);
        self.xpath.borrow_mut().truncate(len);
        result
    }

    /// Views `value` as a JSON object; `null` is an object with no members.
    pub fn object<'v>(&self, value: &'v Value) -> Result<&'v Map<String, Value>, VkJsonError> {
        match value {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(&*EMPTY_OBJECT),
            other => Err(self.type_mismatch("object", other)),
        }
    }

    /// The member `key` of `obj`, or `null` when absent.
    pub fn member<'v>(&self, obj: &'v Map<String, Value>, key: &str) -> &'v Value {
        obj.get(key).unwrap_or(&NULL)
    }

    /// Converts the member `key` of `obj`.
    pub fn field<T: FromJson<'a>>(&self, obj: &Map<String, Value>, key: &str) -> Result<T, VkJsonError> {
        let value = self.member(obj, key);
        self.in_field(key, |ctx| T::from_json(ctx, value))
    }

    /// Reads `sType` by name or number; `None` when absent. A name missing
    /// from the table is an [`UnsupportedStructure`](VkJsonError::UnsupportedStructure)
    /// in either mode, never a default.
    pub fn read_structure_type(&self, obj: &Map<String, Value>) -> Result<Option<StructureType>, VkJsonError> {
        let value = self.member(obj, "sType");
        match value {
            Value::Null => Ok(None),
            Value::String(text) => {
                let text = text.trim();
                if let Some(s_type) = StructureType::from_name(text) {
                    return Ok(Some(s_type));
                }
                match parse_integer_literal(text).and_then(|v| i32::try_from(v).ok()) {
                    Some(raw) => Ok(Some(StructureType(raw))),
                    None => Err(VkJsonError::UnsupportedStructure {
                        path:   self.xpath(),
                        s_type: text.to_owned(),
                    }),
                }
            }
            _ => self.in_field("sType", |ctx| StructureType::from_json(ctx, value)).map(Some),
        }
    }

    /// Reads `sType`. A missing `sType` takes the expected value; a different
    /// one is reported.
    pub fn structure_type(
        &self,
        obj: &Map<String, Value>,
        expected: StructureType,
    ) -> Result<StructureType, VkJsonError> {
        let found = match self.read_structure_type(obj)? {
            Some(found) => found,
            None => return Ok(expected),
        };
        if found != expected {
            self.report(VkJsonError::StructureTypeMismatch {
                path:     self.xpath(),
                expected: format!("{:?}", expected),
                found:    format!("{:?}", found),
            })?;
        }
        Ok(found)
    }

    /// Strict mode returns `err`; lenient mode logs it and carries on.
    pub fn report(&self, err: VkJsonError) -> Result<(), VkJsonError> {
        if self.options.strict {
            return Err(err);
        }
        tracing::warn!("{}", err);
        Ok(())
    }

    /// Compares a non-empty array against its count member.
    pub fn check_count(
        &self,
        key: &str,
        count_field: &'static str,
        declared: u64,
        len: usize,
    ) -> Result<(), VkJsonError> {
        if len == 0 || declared == len as u64 {
            return Ok(());
        }
        self.in_field(key, |ctx| {
            ctx.report(VkJsonError::CountMismatch {
                path: ctx.xpath(),
                count_field,
                declared,
                len,
            })
        })
    }

    pub fn type_mismatch(&self, expected: &'static str, found: &Value) -> VkJsonError {
        VkJsonError::TypeMismatch {
            path:  self.xpath(),
            expected,
            found: json_kind(found),
        }
    }

    pub fn out_of_range(&self, value: impl Display, ty: &'static str) -> VkJsonError {
        VkJsonError::OutOfRange {
            path:  self.xpath(),
            value: value.to_string(),
            ty,
        }
    }

    pub fn invalid(&self, msg: impl Into<String>) -> VkJsonError {
        VkJsonError::InvalidData {
            path: self.xpath(),
            msg:  msg.into(),
        }
    }

    /// Reads an integer written as a number, a boolean, a decimal or
    /// hexadecimal string, or the name of an API constant.
    pub fn integer(&self, value: &Value, ty: &'static str) -> Result<i128, VkJsonError> {
        match value {
            Value::Null => Ok(0),
            Value::Bool(flag) => Ok(i128::from(*flag)),
            Value::Number(number) => {
                if let Some(v) = number.as_u64() {
                    Ok(i128::from(v))
                } else if let Some(v) = number.as_i64() {
                    Ok(i128::from(v))
                } else {
                    match number.as_f64() {
                        Some(v) if v.fract() == 0.0 && v.abs() < 1e38 => Ok(v as i128),
                        _ => Err(self.out_of_range(number, ty)),
                    }
                }
            }
            Value::String(text) => {
                let text = text.trim();
                if let Some(v) = parse_integer_literal(text) {
                    Ok(v)
                } else if let Some(v) = api_constant(text) {
                    Ok(i128::from(v))
                } else {
                    Err(self.invalid(format!("{} is not a valid {}", quote(text), ty)))
                }
            }
            other => Err(self.type_mismatch("integer", other)),
        }
    }

    /// Reads an enumerant by name or value. Unknown names are reported and
    /// read as 0.
    pub fn enumerant(
        &self,
        value: &Value,
        ty: &'static str,
        lookup: &dyn Fn(&str) -> Option<i32>,
    ) -> Result<i32, VkJsonError> {
        if let Value::String(text) = value {
            let text = text.trim();
            if let Some(v) = lookup(text) {
                return Ok(v);
            }
            if is_identifier(text) && api_constant(text).is_none() {
                self.report(VkJsonError::UnknownEnumerant {
                    path: self.xpath(),
                    ty,
                    name: quote(text),
                })?;
                return Ok(0);
            }
        }
        let wide = self.integer(value, ty)?;
        i32::try_from(wide)
            .or_else(|_| u32::try_from(wide).map(|v| v as i32))
            .map_err(|_| self.out_of_range(wide, ty))
    }

    /// Reads a bitmask written as `"A | B"`, an array of bit names, or a
    /// number. Unknown bit names are reported and contribute no bits.
    pub fn flags(
        &self,
        value: &Value,
        ty: &'static str,
        lookup: &dyn Fn(&str) -> Option<u32>,
    ) -> Result<u32, VkJsonError> {
        match value {
            Value::String(text) => self.flag_expression(text, ty, lookup),
            Value::Array(items) => {
                let mut bits = 0;
                for (index, item) in items.iter().enumerate() {
                    bits |= self.in_element(index, |ctx| ctx.flags(item, ty, lookup))?;
                }
                Ok(bits)
            }
            other => {
                let wide = self.integer(other, ty)?;
                u32::try_from(wide).map_err(|_| self.out_of_range(wide, ty))
            }
        }
    }

    fn flag_expression(
        &self,
        text: &str,
        ty: &'static str,
        lookup: &dyn Fn(&str) -> Option<u32>,
    ) -> Result<u32, VkJsonError> {
        let mut bits = 0u32;
        for token in text.split('|').map(str::trim).filter(|token| !token.is_empty()) {
            if let Some(bit) = lookup(token) {
                bits |= bit;
            } else if let Some(v) = parse_integer_literal(token) {
                bits |= u32::try_from(v).map_err(|_| self.out_of_range(v, ty))?;
            } else if is_identifier(token) {
                self.report(VkJsonError::UnknownEnumerant {
                    path: self.xpath(),
                    ty,
                    name: quote(token),
                })?;
            } else {
                return Err(self.invalid(format!("{} is not a valid {} expression", quote(text), ty)));
            }
        }
        Ok(bits)
    }
}
