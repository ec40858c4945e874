use ndarray::Array1;

pub type S = f64;
pub type V = Array1<S>;

/// `num` evenly spaced points over `[start, stop]`, both ends included.
///
/// Points are computed as `start + i * step` with `step = (stop - start) / (num - 1)`,
/// and the last one is pinned to `stop` so partitions end exactly on the
/// requested bound.
pub fn linspace(start: S, stop: S, num: usize) -> V {
    match num {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => {
            let step = (stop - start) / (num - 1) as S;
            Array1::from_shape_fn(num, |i| {
                if i == num - 1 {
                    stop
                } else {
                    start + i as S * step
                }
            })
        }
    }
}

/// Points `start, start + step, ...` strictly below `stop`.
pub fn arange(start: S, stop: S, step: S) -> V {
    if !(step > 0.) || !(stop > start) {
        return Array1::zeros(0);
    }
    let num = ((stop - start) / step).ceil() as usize;
    Array1::from_shape_fn(num, |i| start + i as S * step)
}
