//! Das Schema: zentrale Datenstruktur mit Haltestellen und Linien.
//!
//! Alle Mutationen prüfen zuerst ihre Vorbedingungen und verändern den
//! Zustand erst danach; ein Fehler lässt das Schema unverändert.

use super::{
    is_valid_line_width, next_stop_id, EditError, EntityKind, LineStyle, Route, RouteUpdate,
    Segment, SegmentKey, Stop, StopUpdate,
};
use anyhow::bail;
use glam::Vec2;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

/// Achse einer Ausrichtung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignAxis {
    /// Gemeinsame y-Koordinate
    Horizontal,
    /// Gemeinsame x-Koordinate
    Vertical,
}

/// Bezugswert einer Ausrichtung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignAnchor {
    /// Arithmetisches Mittel aller beteiligten Haltestellen
    #[default]
    Mean,
    /// Koordinate der zuerst gewählten Haltestelle
    First,
}

/// Parameter der automatischen Platzierung neuer Haltestellen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopPlacement {
    /// Erster Kandidat
    pub origin: Vec2,
    /// Abstand zwischen Kandidaten
    pub step: f32,
    /// Kandidaten pro Zeile
    pub columns: usize,
    /// Mindestabstand zu bestehenden Haltestellen
    pub clearance: f32,
}

impl Default for StopPlacement {
    fn default() -> Self {
        Self {
            origin: Vec2::new(100.0, 100.0),
            step: 50.0,
            columns: 10,
            clearance: 10.0,
        }
    }
}

impl StopPlacement {
    fn slot(&self, n: usize) -> Vec2 {
        let columns = self.columns.max(1);
        let col = (n % columns) as f32;
        let row = (n / columns) as f32;
        self.origin + Vec2::new(col * self.step, row * self.step)
    }

    /// Erster Kandidat, der weiter als `clearance` von allen Haltestellen entfernt ist.
    fn free_slot<'a>(&self, stops: impl Iterator<Item = &'a Stop> + Clone) -> Vec2 {
        let count = stops.clone().count();
        (0..=count)
            .map(|n| self.slot(n))
            .find(|candidate| {
                stops
                    .clone()
                    .all(|stop| stop.position.distance(*candidate) > self.clearance)
            })
            .unwrap_or_else(|| self.slot(count))
    }
}

/// Haltestellen und Linien eines Liniennetzplans
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scheme {
    stops: IndexMap<String, Stop>,
    routes: IndexMap<String, Route>,
}

impl Scheme {
    /// Erstellt ein leeres Schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut ein Schema aus bereinigten Teilen auf und berechnet die
    /// Linienzugehörigkeiten neu. Doppelte IDs werden abgelehnt.
    pub(crate) fn from_parts(stops: Vec<Stop>, routes: Vec<Route>) -> Result<Self, EditError> {
        let mut scheme = Self::new();
        for mut stop in stops {
            if scheme.stops.contains_key(&stop.id) {
                return Err(EditError::ImportFormat(format!(
                    "doppelte Haltestellen-ID '{}'",
                    stop.id
                )));
            }
            stop.route_memberships.clear();
            scheme.stops.insert(stop.id.clone(), stop);
        }
        for route in routes {
            if scheme.routes.contains_key(&route.id) {
                return Err(EditError::ImportFormat(format!(
                    "doppelte Linien-ID '{}'",
                    route.id
                )));
            }
            for stop_id in &route.stops {
                if let Some(stop) = scheme.stops.get_mut(stop_id) {
                    stop.route_memberships.insert(route.id.clone());
                }
            }
            scheme.routes.insert(route.id.clone(), route);
        }
        Ok(scheme)
    }

    // ── Lesezugriff ──────────────────────────────────────────────────

    /// Anzahl der Haltestellen.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Anzahl der Linien.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Haltestelle per ID.
    pub fn stop(&self, id: &str) -> Option<&Stop> {
        self.stops.get(id)
    }

    /// Linie per ID.
    pub fn route(&self, id: &str) -> Option<&Route> {
        self.routes.get(id)
    }

    /// Haltestellen in Sammlungsreihenfolge.
    pub fn stops(&self) -> impl Iterator<Item = &Stop> + Clone {
        self.stops.values()
    }

    /// Linien in Sammlungsreihenfolge.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }

    /// Alle Segmente aller Linien in Render-Reihenfolge.
    pub fn segments(&self) -> impl Iterator<Item = (&Route, &Segment)> {
        self.routes
            .values()
            .flat_map(|route| route.segments().map(move |segment| (route, segment)))
    }

    /// Position einer Haltestelle.
    pub fn stop_position(&self, id: &str) -> Option<Vec2> {
        self.stops.get(id).map(|stop| stop.position)
    }

    fn require_stop(&self, id: &str) -> Result<&Stop, EditError> {
        self.stops
            .get(id)
            .ok_or_else(|| EditError::not_found(EntityKind::Stop, id))
    }

    fn require_route(&self, id: &str) -> Result<&Route, EditError> {
        self.routes
            .get(id)
            .ok_or_else(|| EditError::not_found(EntityKind::Route, id))
    }

    fn require_route_mut(&mut self, id: &str) -> Result<&mut Route, EditError> {
        self.routes
            .get_mut(id)
            .ok_or_else(|| EditError::not_found(EntityKind::Route, id))
    }

    // ── Haltestellen ─────────────────────────────────────────────────

    /// Nächste freie Haltestellen-ID.
    pub fn next_stop_id(&self) -> String {
        next_stop_id(self.stops.keys().map(String::as_str))
    }

    /// Legt eine Haltestelle an (Standard-Platzierung ohne Position).
    pub fn add_stop(&mut self, name: &str, position: Option<Vec2>) -> Result<String, EditError> {
        self.add_stop_placed(name, position, &StopPlacement::default())
    }

    /// Legt eine Haltestelle an und liefert ihre ID.
    ///
    /// Ohne Position wird der erste freie Platz aus `placement` gewählt.
    pub fn add_stop_placed(
        &mut self,
        name: &str,
        position: Option<Vec2>,
        placement: &StopPlacement,
    ) -> Result<String, EditError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EditError::Validation { field: "name" });
        }

        let id = self.next_stop_id();
        if self.stops.contains_key(&id) {
            return Err(EditError::precondition(format!(
                "Haltestellen-ID '{id}' ist bereits vergeben"
            )));
        }
        let position = position.unwrap_or_else(|| placement.free_slot(self.stops.values()));
        self.stops
            .insert(id.clone(), Stop::new(id.clone(), name, position));
        Ok(id)
    }

    /// Übernimmt die gesetzten Felder; Positionsänderungen ziehen die
    /// Segment-Enden mit.
    pub fn update_stop(&mut self, id: &str, update: StopUpdate) -> Result<(), EditError> {
        let current = self.require_stop(id)?.position;
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(EditError::Validation { field: "name" });
            }
        }

        if let Some(position) = update.position {
            self.move_stop_by(id, position - current);
        }

        let Some(stop) = self.stops.get_mut(id) else {
            return Err(EditError::not_found(EntityKind::Stop, id));
        };
        if let Some(name) = update.name {
            stop.name = name.trim().to_string();
        }
        if let Some(label_position) = update.label_position {
            stop.label_position = label_position;
        }
        if let Some(is_terminal) = update.is_terminal {
            stop.is_terminal = is_terminal;
        }
        Ok(())
    }

    /// Löscht eine Haltestelle samt aller Vorkommen in Linien und aller
    /// Segmente mit ihr als Endpunkt.
    ///
    /// Mit `reconnect` werden die neuen Nachbarn einer mittleren Haltestelle
    /// durch ein gerades Segment verbunden.
    pub fn delete_stop(&mut self, id: &str, reconnect: bool) -> Result<Stop, EditError> {
        let Some(stop) = self.stops.shift_remove(id) else {
            return Err(EditError::not_found(EntityKind::Stop, id));
        };

        for route_id in &stop.route_memberships {
            if let Some(route) = self.routes.get_mut(route_id) {
                detach_stop(route, id, reconnect, &self.stops);
            }
        }
        Ok(stop)
    }

    // ── Linien ───────────────────────────────────────────────────────

    fn generate_route_id(&self) -> String {
        let mut stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or(0);
        while self.routes.contains_key(&stamp.to_string()) {
            stamp += 1;
        }
        stamp.to_string()
    }

    /// Legt eine leere Linie mit Zeitstempel-ID an.
    pub fn add_route(
        &mut self,
        number: &str,
        name: Option<&str>,
        color: &str,
        line_width: f32,
        line_style: LineStyle,
    ) -> Result<String, EditError> {
        let id = self.generate_route_id();
        self.add_route_with_id(&id, number, name, color, line_width, line_style)?;
        Ok(id)
    }

    /// Legt eine leere Linie mit vorgegebener ID an.
    pub fn add_route_with_id(
        &mut self,
        id: &str,
        number: &str,
        name: Option<&str>,
        color: &str,
        line_width: f32,
        line_style: LineStyle,
    ) -> Result<(), EditError> {
        validate_route_fields(Some(number), Some(color), Some(line_width))?;
        if id.is_empty() {
            return Err(EditError::Validation { field: "id" });
        }
        if self.routes.contains_key(id) {
            return Err(EditError::precondition(format!(
                "Linien-ID '{id}' ist bereits vergeben"
            )));
        }

        let mut route = Route::new(id, number.trim(), color.trim(), line_width, line_style);
        route.name = normalize_name(name);
        self.routes.insert(id.to_string(), route);
        Ok(())
    }

    /// Übernimmt die gesetzten Felder einer Linie.
    pub fn update_route(&mut self, id: &str, update: RouteUpdate) -> Result<(), EditError> {
        self.require_route(id)?;
        validate_route_fields(
            update.number.as_deref(),
            update.color.as_deref(),
            update.line_width,
        )?;

        let route = self.require_route_mut(id)?;
        if let Some(number) = update.number {
            route.number = number.trim().to_string();
        }
        if let Some(name) = update.name {
            route.name = normalize_name(name.as_deref());
        }
        if let Some(color) = update.color {
            route.color = color.trim().to_string();
        }
        if let Some(line_width) = update.line_width {
            route.line_width = line_width;
        }
        if let Some(line_style) = update.line_style {
            route.line_style = line_style;
        }
        Ok(())
    }

    /// Löscht eine Linie und entfernt sie aus allen Zugehörigkeiten.
    pub fn delete_route(&mut self, id: &str) -> Result<Route, EditError> {
        let Some(route) = self.routes.shift_remove(id) else {
            return Err(EditError::not_found(EntityKind::Route, id));
        };
        for stop_id in &route.stops {
            if let Some(stop) = self.stops.get_mut(stop_id) {
                stop.route_memberships.shift_remove(id);
            }
        }
        Ok(route)
    }

    /// Hängt eine Haltestelle an eine Linie an. Ab der zweiten Haltestelle
    /// entsteht ein gerades Segment vom bisherigen Ende zur neuen Haltestelle.
    pub fn add_stop_to_route(&mut self, route_id: &str, stop_id: &str) -> Result<(), EditError> {
        let position = self.require_stop(stop_id)?.position;
        let route = self.require_route(route_id)?;
        if route.contains_stop(stop_id) {
            return Err(EditError::precondition(format!(
                "Haltestelle '{stop_id}' ist bereits Teil der Linie {}",
                route.number
            )));
        }

        let tail = route
            .stops
            .last()
            .and_then(|tail| self.stops.get(tail))
            .map(|tail| (tail.id.clone(), tail.position));

        let route = self.require_route_mut(route_id)?;
        if let Some((tail_id, tail_position)) = tail {
            let segment = Segment::straight(tail_id, stop_id, tail_position, position);
            route.segments.insert(segment.key(), segment);
        }
        route.stops.push(stop_id.to_string());

        if let Some(stop) = self.stops.get_mut(stop_id) {
            stop.route_memberships.insert(route_id.to_string());
        }
        Ok(())
    }

    /// Entfernt eine Haltestelle aus einer Linie samt ihrer Segmente.
    pub fn remove_stop_from_route(
        &mut self,
        route_id: &str,
        stop_id: &str,
        reconnect: bool,
    ) -> Result<(), EditError> {
        let route = self.require_route(route_id)?;
        if !route.contains_stop(stop_id) {
            return Err(EditError::not_found(
                EntityKind::Stop,
                format!("{stop_id} in Linie {route_id}"),
            ));
        }

        if let Some(route) = self.routes.get_mut(route_id) {
            detach_stop(route, stop_id, reconnect, &self.stops);
        }
        if let Some(stop) = self.stops.get_mut(stop_id) {
            stop.route_memberships.shift_remove(route_id);
        }
        Ok(())
    }

    /// Setzt eine neue Haltestellen-Reihenfolge. Weiterhin benachbarte Paare
    /// behalten ihre Geometrie, neue Paare erhalten gerade Segmente.
    pub fn reorder_route_stops(
        &mut self,
        route_id: &str,
        new_order: &[String],
    ) -> Result<(), EditError> {
        let route = self.require_route(route_id)?;
        let current: HashSet<&str> = route.stops.iter().map(String::as_str).collect();
        let proposed: HashSet<&str> = new_order.iter().map(String::as_str).collect();
        if new_order.len() != route.stops.len()
            || proposed.len() != new_order.len()
            || current != proposed
        {
            return Err(EditError::precondition(
                "neue Reihenfolge ist keine Permutation der Haltestellen",
            ));
        }

        let mut segments = IndexMap::with_capacity(new_order.len().saturating_sub(1));
        for pair in new_order.windows(2) {
            let key = SegmentKey::new(pair[0].clone(), pair[1].clone());
            let segment = match route.segments.get(&key) {
                Some(existing) => existing.clone(),
                None => self.straight_segment(&pair[0], &pair[1])?,
            };
            segments.insert(key, segment);
        }

        let route = self.require_route_mut(route_id)?;
        route.stops = new_order.to_vec();
        route.segments = segments;
        Ok(())
    }

    /// Ersetzt alle Segmente einer Linie durch gerade Verbindungen gemäß
    /// aktueller Reihenfolge und Positionen. Eigene Wegpunkte gehen verloren.
    pub fn auto_route(&mut self, route_id: &str) -> Result<(), EditError> {
        let route = self.require_route(route_id)?;
        if route.stops.len() < 2 {
            return Err(EditError::precondition(format!(
                "Linie {} braucht mindestens 2 Haltestellen",
                route.number
            )));
        }

        let segments = route
            .stops
            .windows(2)
            .map(|pair| {
                self.straight_segment(&pair[0], &pair[1])
                    .map(|segment| (segment.key(), segment))
            })
            .collect::<Result<IndexMap<_, _>, _>>()?;

        self.require_route_mut(route_id)?.segments = segments;
        Ok(())
    }

    fn straight_segment(&self, from: &str, to: &str) -> Result<Segment, EditError> {
        let a = self.require_stop(from)?.position;
        let b = self.require_stop(to)?.position;
        Ok(Segment::straight(from, to, a, b))
    }

    // ── Segment-Wegpunkte ────────────────────────────────────────────

    /// Segment einer Linie per (from, to).
    pub fn segment(&self, route_id: &str, from: &str, to: &str) -> Option<&Segment> {
        self.routes.get(route_id)?.segment(from, to)
    }

    fn require_segment_mut(
        &mut self,
        route_id: &str,
        from: &str,
        to: &str,
    ) -> Result<&mut Segment, EditError> {
        self.require_route_mut(route_id)?
            .segment_mut(from, to)
            .ok_or_else(|| EditError::not_found(EntityKind::Segment, format!("{from}-{to}")))
    }

    /// Fügt einen Wegpunkt in der Mitte der letzten Kante ein (das Ende bleibt
    /// an der Ziel-Haltestelle) und liefert seinen Index.
    pub fn add_segment_point(
        &mut self,
        route_id: &str,
        from: &str,
        to: &str,
    ) -> Result<usize, EditError> {
        let segment = self.require_segment_mut(route_id, from, to)?;
        let last = segment.points.len() - 1;
        let midpoint = (segment.points[last - 1] + segment.points[last]) * 0.5;
        segment.points.insert(last, midpoint);
        Ok(last)
    }

    /// Entfernt einen inneren Wegpunkt. Endpunkte und 2-Punkt-Segmente sind
    /// geschützt.
    pub fn delete_segment_point(
        &mut self,
        route_id: &str,
        from: &str,
        to: &str,
        index: usize,
    ) -> Result<Vec2, EditError> {
        let segment = self.require_segment_mut(route_id, from, to)?;
        let len = segment.points.len();
        if index >= len {
            return Err(EditError::not_found(
                EntityKind::Waypoint,
                format!("{from}-{to}#{index}"),
            ));
        }
        if len <= 2 {
            return Err(EditError::precondition(
                "ein Segment braucht mindestens 2 Wegpunkte",
            ));
        }
        if index == 0 || index == len - 1 {
            return Err(EditError::precondition(
                "Endpunkte eines Segments können nicht gelöscht werden",
            ));
        }
        Ok(segment.points.remove(index))
    }

    /// Setzt einen Wegpunkt auf eine absolute Position.
    pub fn move_segment_point(
        &mut self,
        route_id: &str,
        from: &str,
        to: &str,
        index: usize,
        position: Vec2,
    ) -> Result<(), EditError> {
        let segment = self.require_segment_mut(route_id, from, to)?;
        let Some(point) = segment.points.get_mut(index) else {
            return Err(EditError::not_found(
                EntityKind::Waypoint,
                format!("{from}-{to}#{index}"),
            ));
        };
        *point = position;
        Ok(())
    }

    // ── Verschieben & Ausrichten ─────────────────────────────────────

    /// Verschiebt eine Haltestelle um `delta` und zieht nur die an ihr
    /// verankerten Wegpunkte mit. Liefert `false` bei unbekannter ID.
    fn move_stop_by(&mut self, id: &str, delta: Vec2) -> bool {
        let Some(stop) = self.stops.get_mut(id) else {
            return false;
        };
        stop.position += delta;

        for route_id in &stop.route_memberships {
            let Some(route) = self.routes.get_mut(route_id) else {
                continue;
            };
            let (incoming, outgoing) = route.touching_keys(id);
            if let Some(segment) = incoming.and_then(|key| route.segments.get_mut(&key)) {
                if let Some(last) = segment.points.last_mut() {
                    *last += delta;
                }
            }
            if let Some(segment) = outgoing.and_then(|key| route.segments.get_mut(&key)) {
                if let Some(first) = segment.points.first_mut() {
                    *first += delta;
                }
            }
        }
        true
    }

    /// Verschiebt alle genannten Haltestellen um `delta`. Unbekannte IDs
    /// werden übersprungen, Duplikate nur einmal bewegt. Liefert die Anzahl
    /// bewegter Haltestellen.
    pub fn move_stops<'a>(
        &mut self,
        ids: impl IntoIterator<Item = &'a String>,
        delta: Vec2,
    ) -> usize {
        let mut seen = HashSet::new();
        ids.into_iter()
            .filter(|id| seen.insert(*id))
            .filter(|id| self.move_stop_by(id, delta))
            .count()
    }

    /// Richtet Haltestellen auf einer gemeinsamen Achse aus.
    pub fn align_stops<'a>(
        &mut self,
        ids: impl IntoIterator<Item = &'a String>,
        axis: AlignAxis,
        anchor: AlignAnchor,
    ) -> Result<(), EditError> {
        let targets: IndexSet<&String> = ids
            .into_iter()
            .filter(|id| self.stops.contains_key(id.as_str()))
            .collect();
        if targets.len() < 2 {
            return Err(EditError::precondition(
                "zum Ausrichten mindestens 2 Haltestellen wählen",
            ));
        }

        let coordinate = |stop: &Stop| match axis {
            AlignAxis::Horizontal => stop.position.y,
            AlignAxis::Vertical => stop.position.x,
        };
        let values: Vec<f32> = targets
            .iter()
            .filter_map(|id| self.stops.get(id.as_str()))
            .map(coordinate)
            .collect();
        let target = match anchor {
            AlignAnchor::Mean => values.iter().sum::<f32>() / values.len() as f32,
            AlignAnchor::First => values[0],
        };

        let moves: Vec<(String, Vec2)> = targets
            .iter()
            .zip(&values)
            .map(|(id, value)| {
                let delta = match axis {
                    AlignAxis::Horizontal => Vec2::new(0.0, target - value),
                    AlignAxis::Vertical => Vec2::new(target - value, 0.0),
                };
                ((*id).clone(), delta)
            })
            .collect();
        for (id, delta) in moves {
            self.move_stop_by(&id, delta);
        }
        Ok(())
    }

    // ── Invarianten ──────────────────────────────────────────────────

    /// Prüft alle strukturellen Invarianten des Schemas.
    pub fn check_invariants(&self) -> anyhow::Result<()> {
        for (key, stop) in &self.stops {
            if key != &stop.id {
                bail!("Haltestelle unter Schlüssel '{key}' trägt ID '{}'", stop.id);
            }
            for route_id in &stop.route_memberships {
                let listed = self
                    .routes
                    .get(route_id)
                    .is_some_and(|route| route.contains_stop(&stop.id));
                if !listed {
                    bail!(
                        "Haltestelle '{}' nennt Linie '{route_id}', die sie nicht enthält",
                        stop.id
                    );
                }
            }
        }

        for (key, route) in &self.routes {
            if key != &route.id {
                bail!("Linie unter Schlüssel '{key}' trägt ID '{}'", route.id);
            }
            let mut seen = HashSet::new();
            for stop_id in &route.stops {
                if !seen.insert(stop_id) {
                    bail!("Linie '{}' enthält '{stop_id}' mehrfach", route.id);
                }
                let member = self
                    .stops
                    .get(stop_id)
                    .is_some_and(|stop| stop.route_memberships.contains(&route.id));
                if !member {
                    bail!(
                        "Haltestelle '{stop_id}' fehlt oder kennt Linie '{}' nicht",
                        route.id
                    );
                }
            }
            for (segment_key, segment) in &route.segments {
                if segment_key != &segment.key() {
                    bail!("Segment {}-{} unter falschem Schlüssel", segment.from, segment.to);
                }
                if !route.is_adjacent_pair(&segment.from, &segment.to) {
                    bail!(
                        "Segment {}-{} der Linie '{}' verbindet kein benachbartes Paar",
                        segment.from,
                        segment.to,
                        route.id
                    );
                }
                if segment.points.len() < 2 {
                    bail!(
                        "Segment {}-{} der Linie '{}' hat weniger als 2 Wegpunkte",
                        segment.from,
                        segment.to,
                        route.id
                    );
                }
            }
        }
        Ok(())
    }
}

/// Entfernt eine Haltestelle aus der Reihenfolge einer Linie und löscht ihre
/// Segmente; optional werden Vorgänger und Nachfolger direkt verbunden.
fn detach_stop(route: &mut Route, stop_id: &str, reconnect: bool, stops: &IndexMap<String, Stop>) {
    let Some(index) = route.stop_index(stop_id) else {
        return;
    };
    let prev = index.checked_sub(1).map(|i| route.stops[i].clone());
    let next = route.stops.get(index + 1).cloned();

    route.stops.remove(index);
    route.segments.retain(|key, _| !key.touches(stop_id));

    if !reconnect {
        return;
    }
    let (Some(prev), Some(next)) = (prev, next) else {
        return;
    };
    let (Some(a), Some(b)) = (stops.get(&prev), stops.get(&next)) else {
        return;
    };
    let segment = Segment::straight(prev.clone(), next, a.position, b.position);
    let insert_at = route
        .segments
        .keys()
        .position(|key| key.to == prev)
        .map_or(0, |i| i + 1);
    route.segments.shift_insert(insert_at, segment.key(), segment);
}

fn validate_route_fields(
    number: Option<&str>,
    color: Option<&str>,
    line_width: Option<f32>,
) -> Result<(), EditError> {
    if number.is_some_and(|number| number.trim().is_empty()) {
        return Err(EditError::Validation { field: "number" });
    }
    if color.is_some_and(|color| color.trim().is_empty()) {
        return Err(EditError::Validation { field: "color" });
    }
    if line_width.is_some_and(|width| !is_valid_line_width(width)) {
        return Err(EditError::Validation { field: "line_width" });
    }
    Ok(())
}

fn normalize_name(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
