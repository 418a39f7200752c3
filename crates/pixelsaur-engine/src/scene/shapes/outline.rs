use crate::coords::Rect;
use crate::paint::Rgb;
use crate::scene::DrawList;

/// The four bands (top, bottom, left, right) of an outline of `thickness`
/// drawn inside `rect`. Corner cells belong to two bands.
pub fn outline_bands(rect: Rect, thickness: i32) -> [Rect; 4] {
    let Rect { origin: o, size: s } = rect;
    let far = rect.max();
    [
        Rect::new(o.x, o.y, s.x, thickness),
        Rect::new(o.x, far.y.saturating_sub(thickness), s.x, thickness),
        Rect::new(o.x, o.y, thickness, s.y),
        Rect::new(far.x.saturating_sub(thickness), o.y, thickness, s.y),
    ]
}

impl DrawList {
    /// Records a rectangular outline as four solid rectangles.
    pub fn push_outline(&mut self, rect: Rect, color: Rgb, thickness: i32) {
        for band in outline_bands(rect, thickness) {
            self.push_rect(band, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    #[test]
    fn outline_records_four_bands_in_order() {
        let mut list = DrawList::new();
        list.push_outline(Rect::new(10, 20, 30, 40), Rgb::black(), 6);

        let bounds: Vec<Rect> = list.items().iter().map(DrawCmd::bounds).collect();
        assert_eq!(
            bounds,
            vec![
                Rect::new(10, 20, 30, 6),
                Rect::new(10, 54, 30, 6),
                Rect::new(10, 20, 6, 40),
                Rect::new(34, 20, 6, 40),
            ]
        );
        assert!(list.items().iter().all(|c| matches!(c, DrawCmd::Rect(_))));
    }
}
