// Nearest-neighbour magnification.
// Visual expectation: every source pixel becomes a zoom x zoom block in the
// window; edges stay hard, nothing is blended.
use crate::error::Error;
use crate::types::FrameBuffer;

/// Fill every pixel of `dst` from `src[dx / zoom][dy / zoom]`.
/// `dst` is reused frame after frame, so this never allocates.
/// When the window size isn't a multiple of zoom, the last source column/row
/// covers the leftover strip.
pub fn magnify_into(src: &FrameBuffer, zoom_level: usize, dst: &mut FrameBuffer) -> Result<(), Error> {
    // 1) An empty source has nothing to sample from.
    if src.width == 0 || src.height == 0 || src.pixels.len() < src.width * src.height {
        return Err(Error::Scale(format!("source {}x{} has no pixels", src.width, src.height)));
    }
    if zoom_level == 0 {
        return Err(Error::Scale("zoom level must be positive".into()));
    }
    if dst.width == 0 {
        return Ok(());
    }

    let (max_sx, max_sy) = (src.width - 1, src.height - 1);

    // 2) Walk destination rows; each row reads one source row.
    for (dy, row) in dst.pixels.chunks_exact_mut(dst.width).enumerate() {
        let sy = (dy / zoom_level).min(max_sy);
        let src_row = &src.pixels[sy * src.width..(sy + 1) * src.width];
        for (dx, px) in row.iter_mut().enumerate() {
            *px = src_row[(dx / zoom_level).min(max_sx)];
        }
    }
    Ok(())
}

/// Allocating variant: one fresh `output_size x output_size` buffer.
#[cfg(test)]
pub fn magnify(src: &FrameBuffer, zoom_level: usize, output_size: usize) -> Result<FrameBuffer, Error> {
    let mut dst = FrameBuffer::new(output_size, output_size);
    magnify_into(src, zoom_level, &mut dst)?;
    Ok(dst)
}
