//! nom parser for the textual notation.
//!
//! Every element is self-delimited by its class name and parentheses, so
//! the grammar nests without ambiguity: modulation sources, operator
//! children and process sides all reuse the element parsers recursively.

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{alpha1, char, multispace0};
use nom::combinator::{all_consuming, map, map_opt, opt};
use nom::multi::{separated_list0, separated_list1};
use nom::sequence::{delimited, preceded, separated_pair, tuple};
use nom::IResult;

use sbgnet_core::compartment::CompartmentDef;
use sbgnet_core::entity::{EntityClass, EntityDef};
use sbgnet_core::error::{NetworkError, ParseError};
use sbgnet_core::io::NotationParser;
use sbgnet_core::modulation::{ModulationClass, ModulationDef};
use sbgnet_core::network::Network;
use sbgnet_core::operator::{OperatorClass, OperatorDef, SourceDef};
use sbgnet_core::process::{ProcessClass, ProcessDef};
use sbgnet_core::types::{ElementKind, UnitOfInformation};

/// Characters that never occur inside labels.
const RESERVED: &str = "()[]@|,+";

fn label_text(input: &str) -> IResult<&str, String> {
    map_opt(
        take_while1(|c: char| !RESERVED.contains(c)),
        |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        },
    )(input)
}

fn ui_part(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !":,]".contains(c))(input)
}

fn unit_of_information(input: &str) -> IResult<&str, UnitOfInformation> {
    alt((
        map(separated_pair(ui_part, char(':'), ui_part), |(prefix, value)| {
            UnitOfInformation::new(prefix.trim(), value.trim())
        }),
        map(ui_part, |value| UnitOfInformation::untyped(value.trim())),
    ))(input)
}

fn annotations(input: &str) -> IResult<&str, Vec<UnitOfInformation>> {
    delimited(
        char('['),
        separated_list1(char(','), unit_of_information),
        char(']'),
    )(input)
}

fn entity_class(input: &str) -> IResult<&str, EntityClass> {
    map_opt(alpha1, |name: &str| match name {
        "UnspecifiedEntity" => Some(EntityClass::Unspecified),
        "SimpleChemical" => Some(EntityClass::SimpleChemical),
        "Macromolecule" => Some(EntityClass::Macromolecule),
        "NucleicAcidFeature" => Some(EntityClass::NucleicAcidFeature),
        "Complex" => Some(EntityClass::Complex),
        "EmptySet" => Some(EntityClass::EmptySet),
        "PerturbingAgent" => Some(EntityClass::PerturbingAgent),
        _ => None,
    })(input)
}

fn process_class(input: &str) -> IResult<&str, ProcessClass> {
    map_opt(alpha1, |name: &str| match name {
        "GenericProcess" => Some(ProcessClass::Generic),
        "Association" => Some(ProcessClass::Association),
        "Dissociation" => Some(ProcessClass::Dissociation),
        _ => None,
    })(input)
}

fn modulation_class(input: &str) -> IResult<&str, ModulationClass> {
    map_opt(alpha1, |name: &str| match name {
        "Modulation" => Some(ModulationClass::Modulation),
        "Stimulation" => Some(ModulationClass::Stimulation),
        "Catalysis" => Some(ModulationClass::Catalysis),
        "Inhibition" => Some(ModulationClass::Inhibition),
        "NecessaryStimulation" => Some(ModulationClass::NecessaryStimulation),
        _ => None,
    })(input)
}

fn operator_class(input: &str) -> IResult<&str, OperatorClass> {
    map_opt(alpha1, |name: &str| match name {
        "AndOperator" => Some(OperatorClass::And),
        "OrOperator" => Some(OperatorClass::Or),
        "NotOperator" => Some(OperatorClass::Not),
        "DelayOperator" => Some(OperatorClass::Delay),
        _ => None,
    })(input)
}

fn entity(input: &str) -> IResult<&str, EntityDef> {
    let (input, class) = entity_class(input)?;
    let (input, (uis, label, compartment)) = delimited(
        char('('),
        tuple((
            opt(annotations),
            opt(label_text),
            opt(preceded(char('@'), label_text)),
        )),
        char(')'),
    )(input)?;
    let mut def = EntityDef::new(class);
    def.uis = uis.unwrap_or_default();
    def.label = label;
    def.compartment = compartment.map(CompartmentDef::new);
    Ok((input, def))
}

fn side(input: &str) -> IResult<&str, Vec<EntityDef>> {
    separated_list0(char('+'), delimited(multispace0, entity, multispace0))(input)
}

fn process(input: &str) -> IResult<&str, ProcessDef> {
    let (input, class) = process_class(input)?;
    let (input, (reactants, products)) = delimited(
        char('('),
        separated_pair(
            side,
            delimited(multispace0, tag("->"), multispace0),
            side,
        ),
        char(')'),
    )(input)?;
    let mut def = ProcessDef::new(class);
    def.reactants = reactants;
    def.products = products;
    Ok((input, def))
}

fn operator(input: &str) -> IResult<&str, OperatorDef> {
    let (input, class) = operator_class(input)?;
    let (input, children) = delimited(
        char('('),
        separated_list0(char('|'), delimited(multispace0, source, multispace0)),
        char(')'),
    )(input)?;
    let mut def = OperatorDef::new(class);
    def.children = children;
    Ok((input, def))
}

fn source(input: &str) -> IResult<&str, SourceDef> {
    alt((
        map(operator, |o| SourceDef::Operator(Box::new(o))),
        map(entity, SourceDef::Entity),
    ))(input)
}

fn modulation(input: &str) -> IResult<&str, ModulationDef> {
    let (input, class) = modulation_class(input)?;
    let (input, (src, target)) = delimited(
        char('('),
        separated_pair(
            delimited(multispace0, source, multispace0),
            tag("->"),
            delimited(multispace0, process, multispace0),
        ),
        char(')'),
    )(input)?;
    Ok((input, ModulationDef::new(class, src, target)))
}

fn compartment(input: &str) -> IResult<&str, CompartmentDef> {
    map(
        preceded(tag("Compartment"), delimited(char('('), label_text, char(')'))),
        CompartmentDef::new,
    )(input)
}

/// Parser collaborator for the compact textual notation.
#[derive(Debug, Clone, Copy)]
pub struct SbgnTextParser;

impl SbgnTextParser {
    pub fn new() -> Self {
        Self
    }

    fn run<'a, O>(
        kind: ElementKind,
        text: &'a str,
        parser: impl FnMut(&'a str) -> IResult<&'a str, O>,
    ) -> Result<O, ParseError> {
        all_consuming(delimited(multispace0, parser, multispace0))(text)
            .map(|(_, value)| value)
            .map_err(|_| ParseError::new(kind, format!("unparseable fragment {:?}", text)))
    }
}

impl Default for SbgnTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NotationParser for SbgnTextParser {
    fn parse_entity(&self, text: &str) -> Result<EntityDef, ParseError> {
        Self::run(ElementKind::Entity, text, entity)
    }

    fn parse_process(&self, text: &str) -> Result<ProcessDef, ParseError> {
        Self::run(ElementKind::Process, text, process)
    }

    fn parse_modulation(&self, text: &str) -> Result<ModulationDef, ParseError> {
        Self::run(ElementKind::Modulation, text, modulation)
    }

    fn parse_compartment(&self, text: &str) -> Result<CompartmentDef, ParseError> {
        Self::run(ElementKind::Compartment, text, compartment)
    }

    fn parse_lo(&self, text: &str) -> Result<OperatorDef, ParseError> {
        Self::run(ElementKind::LogicalOperator, text, operator)
    }
}

/// Parse a whole document, one element per line, into a fresh network.
///
/// Blank lines and lines starting with `#` are skipped. The element kind is
/// dispatched on the class name before the first parenthesis.
pub fn parse_network(text: &str) -> Result<Network, NetworkError> {
    let parser = SbgnTextParser::new();
    let mut network = Network::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let name = line.split('(').next().unwrap_or_default();
        match name {
            "Compartment" => {
                network.add_compartment_text(&parser, line)?;
            }
            "AndOperator" | "OrOperator" | "NotOperator" | "DelayOperator" => {
                network.add_lo_text(&parser, line)?;
            }
            "GenericProcess" | "Association" | "Dissociation" => {
                network.add_process_text(&parser, line)?;
            }
            "Modulation" | "Stimulation" | "Catalysis" | "Inhibition"
            | "NecessaryStimulation" => {
                network.add_modulation_text(&parser, line)?;
            }
            "UnspecifiedEntity" | "SimpleChemical" | "Macromolecule" | "NucleicAcidFeature"
            | "Complex" | "EmptySet" | "PerturbingAgent" => {
                network.add_entity_text(&parser, line)?;
            }
            other => {
                return Err(ParseError::new(
                    ElementKind::Entity,
                    format!("unknown element class {:?}", other),
                )
                .into());
            }
        }
    }
    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_with_annotations_and_compartment() {
        let parser = SbgnTextParser::new();
        let def = parser
            .parse_entity("NucleicAcidFeature([ct:mRNA]TP53m@cytosol)")
            .unwrap();
        assert_eq!(def.class, EntityClass::NucleicAcidFeature);
        assert_eq!(def.label.as_deref(), Some("TP53m"));
        assert_eq!(def.compartment, Some(CompartmentDef::new("cytosol")));
        assert!(def.has_ui("ct", "mRNA"));
    }

    #[test]
    fn empty_set_has_no_attributes() {
        let parser = SbgnTextParser::new();
        let def = parser.parse_entity("EmptySet()").unwrap();
        assert_eq!(def.class, EntityClass::EmptySet);
        assert_eq!(def.label, None);
        assert_eq!(def.compartment, None);
        assert!(def.uis.is_empty());
    }

    #[test]
    fn process_with_multiple_reactants() {
        let parser = SbgnTextParser::new();
        let def = parser
            .parse_process("Association(Macromolecule(A) + Macromolecule(B) -> Complex(AB))")
            .unwrap();
        assert_eq!(def.class, ProcessClass::Association);
        assert_eq!(def.reactants.len(), 2);
        assert_eq!(def.products.len(), 1);
    }

    #[test]
    fn process_side_may_be_empty() {
        let parser = SbgnTextParser::new();
        let def = parser.parse_process("GenericProcess( -> Macromolecule(P))").unwrap();
        assert!(def.reactants.is_empty());
        assert_eq!(def.products.len(), 1);
    }

    #[test]
    fn modulation_nests_source_and_target() {
        let parser = SbgnTextParser::new();
        let def = parser
            .parse_modulation(
                "NecessaryStimulation(NucleicAcidFeature([ct:gene]TP53g) -> \
                 GenericProcess(EmptySet() -> NucleicAcidFeature([ct:mRNA]TP53m)))",
            )
            .unwrap();
        assert_eq!(def.class, ModulationClass::NecessaryStimulation);
        assert!(matches!(def.source, SourceDef::Entity(_)));
        assert_eq!(def.target.products.len(), 1);
    }

    #[test]
    fn operator_children_may_nest() {
        let parser = SbgnTextParser::new();
        let def = parser
            .parse_lo("AndOperator(Macromolecule(A)|NotOperator(Macromolecule(B)))")
            .unwrap();
        assert_eq!(def.class, OperatorClass::And);
        assert_eq!(def.children.len(), 2);
        assert!(matches!(def.children[1], SourceDef::Operator(_)));
    }

    #[test]
    fn display_and_parse_agree() {
        let parser = SbgnTextParser::new();
        let def = EntityDef::macromolecule("TP53")
            .in_compartment(CompartmentDef::new("nucleus"))
            .with_ui(UnitOfInformation::new("pt", "phosphorylated"));
        let reparsed = parser.parse_entity(&def.to_string()).unwrap();
        assert_eq!(def, reparsed);
    }

    #[test]
    fn malformed_fragments_are_rejected() {
        let parser = SbgnTextParser::new();
        assert!(parser.parse_entity("Macromolecule(").is_err());
        assert!(parser.parse_entity("NotAClass(X)").is_err());
        assert!(parser.parse_process("Macromolecule(A)").is_err());
        assert!(parser
            .parse_modulation("Catalysis(Macromolecule(E))")
            .is_err());
    }

    #[test]
    fn parse_network_dispatches_by_class() {
        let document = "\
# a two-step toy map
Compartment(cytosol)
Macromolecule(TP53@cytosol)
GenericProcess(EmptySet() -> Macromolecule(TP53@cytosol))
Catalysis(Macromolecule(E) -> GenericProcess(EmptySet() -> Macromolecule(TP53@cytosol)))
";
        let network = parse_network(document).unwrap();
        assert_eq!(network.compartment_count(), 1);
        assert_eq!(network.process_count(), 1);
        assert_eq!(network.modulation_count(), 1);
        // TP53, EmptySet and E.
        assert_eq!(network.entity_count(), 3);
    }

    #[test]
    fn parse_network_rejects_unknown_classes() {
        assert!(parse_network("Blob(x)").is_err());
    }
}
