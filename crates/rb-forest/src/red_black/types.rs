use crate::types::{Color, Node, RbNodeLike};

/// Red-black node with an embedded payload.
///
/// The engine only ever touches `p`, `l`, `r` and `color`; `data` belongs to
/// the consumer and is never copied or moved by rebalancing.
#[derive(Clone, Debug)]
pub struct RbNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub color: Color,
    pub data: T,
}

impl<T> RbNode<T> {
    /// A detached red node: every relation is nil.
    pub fn new(data: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            color: Color::Red,
            data,
        }
    }

    /// `true` when no relation is set.
    pub fn is_detached(&self) -> bool {
        self.p.is_none() && self.l.is_none() && self.r.is_none()
    }
}

impl<T> Node for RbNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<T> RbNodeLike for RbNode<T> {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
