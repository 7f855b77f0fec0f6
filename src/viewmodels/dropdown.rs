// src/viewmodels/dropdown.rs

/// Retângulo em coordenadas da janela (pixels, origem no canto superior esquerdo).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    Below,
    Above,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuPosition {
    pub x: f32,
    pub y: f32,
    pub placement: Placement,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropdownEvent {
    Toggle,
    Escape,
    // Clique em qualquer ponto da janela
    Click { x: f32, y: f32 },
}

// Distância entre o botão e o menu
const GAP: f32 = 4.0;

/// Estado aberto/fechado e posição de um menu suspenso ancorado num botão.
#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    open: bool,
    anchor: Rect,
    menu_width: f32,
    menu_height: f32,
}

impl Dropdown {
    pub fn new(anchor: Rect, menu_width: f32, menu_height: f32) -> Self {
        Self {
            open: false,
            anchor,
            menu_width,
            menu_height,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// O botão pode mudar de lugar (scroll, redimensionamento).
    pub fn set_anchor(&mut self, anchor: Rect) {
        self.anchor = anchor;
    }

    pub fn anchor(&self) -> Rect {
        self.anchor
    }

    /// Aplica um evento e devolve se o menu ficou aberto.
    pub fn handle(&mut self, event: DropdownEvent, viewport: (f32, f32)) -> bool {
        match event {
            DropdownEvent::Toggle => self.open = !self.open,
            DropdownEvent::Escape => self.open = false,
            DropdownEvent::Click { x, y } => {
                if self.open {
                    let inside_anchor = self.anchor.contains(x, y);
                    let inside_menu = self.menu_rect(viewport).contains(x, y);
                    if !inside_anchor && !inside_menu {
                        self.open = false;
                    }
                }
            }
        }
        self.open
    }

    /// Abaixo do botão quando cabe; senão acima, se lá houver mais espaço.
    /// Horizontalmente o menu nunca sai da janela.
    pub fn position(&self, viewport: (f32, f32)) -> MenuPosition {
        let (viewport_width, viewport_height) = viewport;

        let space_below = viewport_height - self.anchor.bottom() - GAP;
        let space_above = self.anchor.y - GAP;

        let (y, placement) = if self.menu_height <= space_below || space_below >= space_above {
            (self.anchor.bottom() + GAP, Placement::Below)
        } else {
            ((self.anchor.y - GAP - self.menu_height).max(0.0), Placement::Above)
        };

        let max_x = (viewport_width - self.menu_width).max(0.0);
        let x = self.anchor.x.clamp(0.0, max_x);

        MenuPosition { x, y, placement }
    }

    pub fn menu_rect(&self, viewport: (f32, f32)) -> Rect {
        let pos = self.position(viewport);
        Rect::new(pos.x, pos.y, self.menu_width, self.menu_height)
    }
}
