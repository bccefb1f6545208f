// src/vec3.rs

/// 3D vector dot product.
#[inline]
pub fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// 3D vector cross product: a × b.
#[inline]
pub fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Scalar triple product s · (a × b).
#[inline]
pub fn triple(s: [f64; 3], a: [f64; 3], b: [f64; 3]) -> f64 {
    dot(s, cross(a, b))
}

#[inline]
pub fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn scale(a: [f64; 3], s: f64) -> [f64; 3] {
    [a[0] * s, a[1] * s, a[2] * s]
}

/// a + s * b
#[inline]
pub fn axpy(a: [f64; 3], s: f64, b: [f64; 3]) -> [f64; 3] {
    [a[0] + s * b[0], a[1] + s * b[1], a[2] + s * b[2]]
}

#[inline]
pub fn norm(a: [f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

/// Normalise a 3D vector to unit length.
///
/// A zero vector comes back as NaN components; callers that need a fallback
/// direction must check the norm themselves.
#[inline]
pub fn normalize(v: [f64; 3]) -> [f64; 3] {
    let inv = 1.0 / norm(v);
    [v[0] * inv, v[1] * inv, v[2] * inv]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(cross([0.0, 1.0, 0.0], [1.0, 0.0, 0.0]), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn triple_product_is_signed_volume() {
        let x = [1.0, 0.0, 0.0];
        let y = [0.0, 1.0, 0.0];
        let z = [0.0, 0.0, 1.0];
        assert_eq!(triple(z, x, y), 1.0);
        assert_eq!(triple(z, y, x), -1.0);
        assert_eq!(triple(z, x, [0.0; 3]), 0.0);
    }

    #[test]
    fn normalize_zero_is_nan() {
        let v = normalize([0.0, 0.0, 0.0]);
        assert!(v.iter().all(|c| c.is_nan()));
        let u = normalize([3.0, 0.0, 4.0]);
        assert!((norm(u) - 1.0).abs() < 1e-15);
    }
}
