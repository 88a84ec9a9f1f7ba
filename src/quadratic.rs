use crate::types::QuadRoots;

const FLAT_CURVATURE: f64 = 1e-12;

/// Fits the parabola through `(−1, ym)`, `(0, yz)`, `(+1, yp)` and locates
/// its roots inside [-1, 1].
///
/// When a single root lies in range it is always reported as `z1`. Samples
/// without curvature are solved as a line; their extremum is reported at
/// `(0, yz)`.
pub fn find_roots(ym: f64, yz: f64, yp: f64) -> QuadRoots {
    let a = 0.5 * (yp + ym) - yz;
    let b = 0.5 * (yp - ym);
    let c = yz;

    if a.abs() < FLAT_CURVATURE {
        return find_linear_root(b, c);
    }

    let xe = -b / (2.0 * a);
    let ye = (a * xe + b) * xe + c;
    let mut roots = QuadRoots {
        count: 0,
        z1: 0.0,
        z2: 0.0,
        xe,
        ye,
    };

    let dis = b * b - 4.0 * a * c;
    if dis > 0.0 {
        let dx = 0.5 * dis.sqrt() / a.abs();
        roots.z1 = xe - dx;
        roots.z2 = xe + dx;
        if roots.z1.abs() <= 1.0 {
            roots.count += 1;
        }
        if roots.z2.abs() <= 1.0 {
            roots.count += 1;
        }
        if roots.z1 < -1.0 {
            roots.z1 = roots.z2;
        }
    }
    roots
}

fn find_linear_root(b: f64, c: f64) -> QuadRoots {
    let mut roots = QuadRoots {
        count: 0,
        z1: 0.0,
        z2: 0.0,
        xe: 0.0,
        ye: c,
    };
    if b != 0.0 {
        let z = -c / b;
        roots.z1 = z;
        roots.z2 = z;
        if z.abs() <= 1.0 {
            roots.count = 1;
        }
    }
    roots
}
