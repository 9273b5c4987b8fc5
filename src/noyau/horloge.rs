// src/noyau/horloge.rs
//
// Source de temps injectable : le chronomètre de la manche ne lit jamais
// l’horloge système directement (tests déterministes).

use std::time::Duration;

pub trait Horloge {
    /// Temps écoulé depuis une origine fixe propre à l’horloge.
    fn maintenant(&self) -> Duration;
}

/// Horloge murale. `web_time::Instant` = `std::time::Instant` en natif,
/// `performance.now()` en wasm32 (où `std::time::Instant` panique).
#[derive(Clone, Copy, Debug)]
pub struct HorlogeSysteme {
    origine: web_time::Instant,
}

impl Default for HorlogeSysteme {
    fn default() -> Self {
        Self {
            origine: web_time::Instant::now(),
        }
    }
}

impl Horloge for HorlogeSysteme {
    fn maintenant(&self) -> Duration {
        self.origine.elapsed()
    }
}

/// Horloge pilotée à la main (tests). Les clones partagent le même temps.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct HorlogeManuelle {
    temps: std::rc::Rc<std::cell::Cell<Duration>>,
}

#[cfg(test)]
impl HorlogeManuelle {
    pub fn avancer(&self, d: Duration) {
        self.temps.set(self.temps.get() + d);
    }
}

#[cfg(test)]
impl Horloge for HorlogeManuelle {
    fn maintenant(&self) -> Duration {
        self.temps.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manuelle_partagee() {
        let h = HorlogeManuelle::default();
        let vue = h.clone();
        h.avancer(Duration::from_millis(1500));
        assert_eq!(vue.maintenant(), Duration::from_millis(1500));
    }

    #[test]
    fn systeme_monotone() {
        let h = HorlogeSysteme::default();
        let a = h.maintenant();
        let b = h.maintenant();
        assert!(b >= a);
    }
}
