// src/noyau/operateur.rs

use std::fmt;

/// Nombre de slots d’opérateurs (entre 4 nombres).
pub const NB_SLOTS: usize = 3;

/// Slots d’opérateurs d’un problème (None = vide).
pub type Operateurs = [Option<Operateur>; NB_SLOTS];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Div,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Div,
    ];

    /// Symbole de la forme évaluable.
    pub fn ascii(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Div => '/',
        }
    }

    /// Glyphe d’affichage.
    pub fn glyphe(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Div => '÷',
        }
    }

    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Div => a / b,
        }
    }

    /// * et / lient plus fort que + et -.
    pub fn est_multiplicatif(self) -> bool {
        matches!(self, Operateur::Fois | Operateur::Div)
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyphe())
    }
}
