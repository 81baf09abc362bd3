/// One line of the query file
#[derive(Debug, Clone, PartialEq)]
pub struct QueryLine {
    pub id: String,
    pub text: String,
}


/// Reads `<queryId>:<query text>` lines, skipping lines without a `:`
pub fn parse_query_file(text: &str) -> Vec<QueryLine> {
    text.lines()
        .filter_map(|line| {
            let separator = line.find(':')?;

            Some(QueryLine {
                id: line[..separator].trim().to_string(),
                text: line[separator + 1..].trim().to_string(),
            })
        })
        .collect()
}
