//! Handlebars helpers exposing the generator components to templates.
//!
//! | Helper | Arguments | Backed by |
//! |--------|-----------|-----------|
//! | `normalize` | identifier | [`naming::normalize`] |
//! | `to_upper_snake` | identifier | [`naming::to_upper_snake`] |
//! | `common_prefix` | array of members or names | [`prefix::common_prefix`] |
//! | `strip_prefix` | identifier, prefix | [`prefix::strip_prefix`] |
//! | `to_doc_text` | comment, indent level (default 0) | [`comment::to_doc_text`] |
//! | `map_type` | native annotation | [`types::map_type`] |
//! | `path_dirname` | path | [`Path::parent`] |
//! | `path_basename` | path | [`Path::file_name`] |
//!
//! Every argument must resolve. A path that points at nothing is reported as
//! a missing variable, the same way strict mode reports `{{missing}}`.

use crate::error::CodegenError;
use crate::{comment, naming, prefix, types};
use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderError,
    RenderErrorReason,
};
use serde_json::Value;
use std::path::Path;

/// Register all generator helpers on `registry`.
pub(crate) fn register(registry: &mut Handlebars<'_>) {
    registry.register_helper("normalize", Box::new(normalize_helper));
    registry.register_helper("to_upper_snake", Box::new(to_upper_snake_helper));
    registry.register_helper("common_prefix", Box::new(common_prefix_helper));
    registry.register_helper("strip_prefix", Box::new(strip_prefix_helper));
    registry.register_helper("to_doc_text", Box::new(to_doc_text_helper));
    registry.register_helper("map_type", Box::new(map_type_helper));
    registry.register_helper("path_dirname", Box::new(path_dirname_helper));
    registry.register_helper("path_basename", Box::new(path_basename_helper));
}

fn normalize_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let raw = str_param(h, "normalize", 0)?;
    out.write(&naming::normalize(raw))?;
    Ok(())
}

fn to_upper_snake_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let raw = str_param(h, "to_upper_snake", 0)?;
    out.write(&naming::to_upper_snake(raw))?;
    Ok(())
}

fn common_prefix_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let members = param(h, "common_prefix", 0)?
        .as_array()
        .ok_or_else(|| type_mismatch("common_prefix", 0, "an array"))?;

    // Members without a usable name are placeholders and do not count.
    let names = members.iter().map(|member| match member {
        Value::String(name) => Some(name.as_str()),
        Value::Object(fields) => fields.get("name").and_then(Value::as_str),
        _ => None,
    });

    out.write(&prefix::common_prefix(names))?;
    Ok(())
}

fn strip_prefix_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let raw = str_param(h, "strip_prefix", 0)?;
    let prefix = str_param(h, "strip_prefix", 1)?;
    out.write(prefix::strip_prefix(raw, prefix))?;
    Ok(())
}

fn to_doc_text_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let comment = match param(h, "to_doc_text", 0)? {
        Value::Null => None,
        Value::String(text) => Some(text.as_str()),
        _ => return Err(type_mismatch("to_doc_text", 0, "a string or null")),
    };

    let indent_level = match h.param(1) {
        None => 0,
        Some(_) => param(h, "to_doc_text", 1)?
            .as_u64()
            .and_then(|level| usize::try_from(level).ok())
            .ok_or_else(|| type_mismatch("to_doc_text", 1, "a non-negative integer"))?,
    };

    out.write(&comment::to_doc_text(comment, indent_level))?;
    Ok(())
}

fn map_type_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let annotation = str_param(h, "map_type", 0)?;
    let target = types::map_type(annotation).map_err(nested)?;
    out.write(target)?;
    Ok(())
}

fn path_dirname_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let path = Path::new(str_param(h, "path_dirname", 0)?);
    let dirname = path.parent().unwrap_or(Path::new(""));
    out.write(&dirname.to_string_lossy())?;
    Ok(())
}

fn path_basename_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let path = Path::new(str_param(h, "path_basename", 0)?);
    let basename = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    out.write(&basename)?;
    Ok(())
}

/// Resolve positional parameter `index` of `helper`.
fn param<'a>(h: &'a Helper, helper: &'static str, index: usize) -> Result<&'a Value, RenderError> {
    let param = h
        .param(index)
        .ok_or_else(|| RenderErrorReason::Other(format!("{helper}: missing argument {index}")))?;

    if param.is_value_missing() {
        let name = param
            .relative_path()
            .map(|path| path.to_string())
            .unwrap_or_else(|| format!("{helper} argument {index}"));
        return Err(RenderErrorReason::MissingVariable(Some(name)).into());
    }

    Ok(param.value())
}

fn str_param<'a>(h: &'a Helper, helper: &'static str, index: usize) -> Result<&'a str, RenderError> {
    param(h, helper, index)?
        .as_str()
        .ok_or_else(|| type_mismatch(helper, index, "a string"))
}

fn type_mismatch(helper: &str, index: usize, expected: &str) -> RenderError {
    RenderErrorReason::Other(format!("{helper}: argument {index} must be {expected}")).into()
}

/// Carry a generator error through handlebars so the renderer can recover it.
fn nested(err: CodegenError) -> RenderError {
    RenderErrorReason::NestedError(Box::new(err)).into()
}
