use podteam_model::{Patch, PatchOperation, PointerBuf};
use serde_json::{Map, Value};

/// Structural diff producing a JSON Patch that turns `original` into `mutated`.
///
/// - objects are compared member by member, in map order;
/// - arrays are compared index by index; growth is expressed as `add` at the
///   new indexes, shrinking as `remove` from the last index down;
/// - any other difference, including a change of type, is a `replace`.
///
/// Equal documents produce an empty patch.
pub fn diff(original: &Value, mutated: &Value) -> Patch {
    let mut patch = Patch::new();
    diff_value(&PointerBuf::root(), original, mutated, &mut patch);
    patch
}

fn diff_value(path: &PointerBuf, left: &Value, right: &Value, out: &mut Patch) {
    if left == right {
        return;
    }
    match (left, right) {
        (Value::Object(l), Value::Object(r)) => diff_object(path, l, r, out),
        (Value::Array(l), Value::Array(r)) => diff_array(path, l, r, out),
        _ => out.push(PatchOperation::Replace {
            path: path.to_string(),
            value: right.clone(),
        }),
    }
}

fn diff_object(
    path: &PointerBuf,
    l: &Map<String, Value>,
    r: &Map<String, Value>,
    out: &mut Patch,
) {
    for (key, lv) in l {
        match r.get(key) {
            Some(rv) => diff_value(&path.with(key), lv, rv, out),
            None => out.push(PatchOperation::Remove {
                path: path.with(key).into(),
            }),
        }
    }
    for (key, rv) in r {
        if !l.contains_key(key) {
            out.push(PatchOperation::Add {
                path: path.with(key).into(),
                value: rv.clone(),
            });
        }
    }
}

fn diff_array(path: &PointerBuf, l: &[Value], r: &[Value], out: &mut Patch) {
    let common = l.len().min(r.len());
    for i in 0..common {
        diff_value(&path.with_index(i), &l[i], &r[i], out);
    }
    for (i, rv) in r.iter().enumerate().skip(common) {
        out.push(PatchOperation::Add {
            path: path.with_index(i).into(),
            value: rv.clone(),
        });
    }
    for i in (common..l.len()).rev() {
        out.push(PatchOperation::Remove {
            path: path.with_index(i).into(),
        });
    }
}
