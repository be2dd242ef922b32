//! Deterministic fake cliente and vehiculo data.
//!
//! The same seed always yields the same sequence. DNI numbers, emails and
//! plates are unique within one factory.

use std::collections::HashSet;

use fake::faker::internet::raw::SafeEmail;
use fake::faker::name::raw::Name;
use fake::locales::EN;
use fake::Fake;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use uuid::Uuid;

use domain::{ClienteData, DniCode, DniError, VehiculoData, MAX_DNI_NUMBER, TELEFONO_DIGITS};

/// Attempts at drawing an unused value before giving up.
const MAX_UNIQUE_ATTEMPTS: usize = 1_000;

const CARS: &[(&str, [&str; 4])] = &[
    ("Toyota", ["Corolla", "Rav4", "Camry", "Prius"]),
    ("Honda", ["Civic", "Accord", "Odyssey", "Pilot"]),
    ("Ford", ["Fiesta", "Focus", "Mustang", "Explorer"]),
    ("Chevrolet", ["Corvette", "Camaro", "Malibu", "Trailblazer"]),
    ("Volkswagen", ["Golf", "Tiguan", "Polo", "Golf Plus"]),
    ("BMW", ["3 Series", "5 Series", "7 Series", "X5"]),
    ("Mercedes", ["C-Class", "E-Class", "G-Class", "S-Class"]),
    ("Audi", ["A4", "Q5", "Q7", "RS Q3"]),
];

const COLORS: &[&str] = &[
    "black", "maroon", "green", "navy", "olive", "purple", "teal", "lime", "blue", "silver",
    "gray", "yellow", "fuchsia", "aqua", "white",
];

/// Plate letters; vowels and easily confused letters are not used.
const PLACA_LETTERS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";

const MIN_ANIO: i32 = 2000;
const MAX_ANIO: i32 = 2024;
const MAX_KILOMETRAJE: i32 = 200_000;

#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("no unused {what} after {attempts} attempts")]
    Exhausted {
        what: &'static str,
        attempts: usize,
    },

    #[error(transparent)]
    Dni(#[from] DniError),
}

pub struct Factory {
    rng: ChaCha8Rng,
    dni_numbers: HashSet<u32>,
    emails: HashSet<String>,
    placas: HashSet<String>,
}

impl Factory {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            dni_numbers: HashSet::new(),
            emails: HashSet::new(),
            placas: HashSet::new(),
        }
    }

    pub fn cliente(&mut self) -> Result<ClienteData, FactoryError> {
        let nombre: String = Name(EN).fake_with_rng(&mut self.rng);
        Ok(ClienteData {
            nombre,
            email: self.email()?,
            telefono: self.telefono(),
            dni: self.dni()?,
        })
    }

    pub fn vehiculo(&mut self, cliente_id: Uuid) -> Result<VehiculoData, FactoryError> {
        let (marca, modelos) = CARS[self.rng.random_range(0..CARS.len())];
        let modelo = modelos[self.rng.random_range(0..modelos.len())];
        let color = COLORS[self.rng.random_range(0..COLORS.len())];

        Ok(VehiculoData {
            marca: marca.to_string(),
            modelo: modelo.to_string(),
            color: color.to_string(),
            placa: self.placa()?,
            anio: self.rng.random_range(MIN_ANIO..=MAX_ANIO),
            kilometraje: self.rng.random_range(0..=MAX_KILOMETRAJE),
            cliente_id,
        })
    }

    /// Number of vehiculos to give a new cliente.
    pub fn vehiculo_count(&mut self) -> usize {
        self.rng.random_range(1..=3)
    }

    fn dni(&mut self) -> Result<DniCode, FactoryError> {
        for _ in 0..MAX_UNIQUE_ATTEMPTS {
            let number = self.rng.random_range(0..=MAX_DNI_NUMBER);
            if self.dni_numbers.insert(number) {
                return Ok(DniCode::generate(number)?);
            }
        }
        Err(self.exhausted("DNI"))
    }

    fn email(&mut self) -> Result<String, FactoryError> {
        for _ in 0..MAX_UNIQUE_ATTEMPTS {
            let email: String = SafeEmail(EN).fake_with_rng(&mut self.rng);
            if self.emails.insert(email.clone()) {
                return Ok(email);
            }
        }
        Err(self.exhausted("email"))
    }

    fn telefono(&mut self) -> String {
        (0..TELEFONO_DIGITS)
            .map(|_| char::from(b'0' + self.rng.random_range(0..10u8)))
            .collect()
    }

    /// `NNNN-L`, `NNNN-LL` or `NNNN-LLL` (5%, 15% and 80% of plates).
    fn placa(&mut self) -> Result<String, FactoryError> {
        for _ in 0..MAX_UNIQUE_ATTEMPTS {
            let digits: u16 = self.rng.random_range(0..10_000);
            let letters = match self.rng.random_range(0..100u8) {
                0..=79 => 3,
                80..=94 => 2,
                _ => 1,
            };
            let suffix: String = (0..letters)
                .map(|_| char::from(PLACA_LETTERS[self.rng.random_range(0..PLACA_LETTERS.len())]))
                .collect();

            let placa = format!("{digits:04}-{suffix}");
            if self.placas.insert(placa.clone()) {
                return Ok(placa);
            }
        }
        Err(self.exhausted("placa"))
    }

    fn exhausted(&self, what: &'static str) -> FactoryError {
        FactoryError::Exhausted {
            what,
            attempts: MAX_UNIQUE_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::rules::TELEFONO_REGEX;

    #[test]
    fn same_seed_same_data() {
        let mut a = Factory::new(7);
        let mut b = Factory::new(7);

        for _ in 0..20 {
            assert_eq!(a.cliente().unwrap(), b.cliente().unwrap());
        }
    }

    #[test]
    fn clientes_are_valid_and_unique() {
        let mut factory = Factory::new(42);
        let mut dnis = HashSet::new();
        let mut emails = HashSet::new();

        for _ in 0..500 {
            let cliente = factory.cliente().unwrap();
            let dni = cliente.dni.to_string();

            assert_eq!(domain::validate_dni(&dni), Ok(()));
            assert!(TELEFONO_REGEX.is_match(&cliente.telefono));
            assert!(cliente.nombre.chars().count() >= 3);
            assert!(dnis.insert(dni));
            assert!(emails.insert(cliente.email));
        }
    }

    #[test]
    fn vehiculos_follow_catalog() {
        let mut factory = Factory::new(3);
        let owner = Uuid::new_v4();
        let mut placas = HashSet::new();

        for _ in 0..500 {
            let v = factory.vehiculo(owner).unwrap();
            let (_, modelos) = CARS
                .iter()
                .find(|(marca, _)| *marca == v.marca)
                .expect("known marca");

            assert!(modelos.contains(&v.modelo.as_str()));
            assert!(COLORS.contains(&v.color.as_str()));
            assert!((MIN_ANIO..=MAX_ANIO).contains(&v.anio));
            assert!((0..=MAX_KILOMETRAJE).contains(&v.kilometraje));
            assert_eq!(v.cliente_id, owner);
            assert!(placas.insert(v.placa));
        }
    }

    #[test]
    fn placa_shape() {
        let mut factory = Factory::new(11);
        let mut suffix_lengths = HashSet::new();

        for _ in 0..300 {
            let placa = factory.placa().unwrap();
            let (digits, letters) = placa.split_once('-').expect("dash");

            assert_eq!(digits.len(), 4);
            assert!(digits.bytes().all(|b| b.is_ascii_digit()));
            assert!((1..=3).contains(&letters.len()));
            assert!(letters.bytes().all(|b| PLACA_LETTERS.contains(&b)));
            suffix_lengths.insert(letters.len());
        }

        assert_eq!(suffix_lengths.len(), 3);
    }

    #[test]
    fn vehiculo_count_in_range() {
        let mut factory = Factory::new(5);
        for _ in 0..100 {
            assert!((1..=3).contains(&factory.vehiculo_count()));
        }
    }
}
