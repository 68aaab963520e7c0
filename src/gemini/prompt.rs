//! Prompt construction for the market analysis call

/// Fixed system instruction describing the five analytical steps the model
/// is asked to perform over the raw keyword list.
pub const SYSTEM_INSTRUCTION: &str = "\
Você é um Analista de Mercado Especialista na economia de Angola. \
Sua tarefa é analisar palavras-chave brutas do Google Trends (Região Angola) e transformá-las em insights de negócios.
1. Filtre apenas produtos físicos e serviços comercializáveis (ignore celebridades, notícias políticas ou buscas sem valor comercial).
2. Agrupe termos semelhantes (ex: \"tenis nike\", \"sapatos de corrida\", \"calçado desportivo\" -> \"Calçados Desportivos\").
3. Determine o nível de procura (Baixa, Média, Alta) com base no volume relativo.
4. Identifique a tendência (Subindo, Estável, Caindo).
5. Estime o crescimento percentual e atribua um \"Opportunity Score\" de 0 a 100.
6. Forneça uma breve explicação (reasoning) do porquê esse produto é uma oportunidade em Angola agora.";

/// User prompt embedding the joined keyword list.
pub fn build_prompt(keywords: &[String]) -> String {
    format!(
        "Analise as seguintes palavras-chave coletadas do Google Trends Angola: {}",
        keywords.join(", ")
    )
}
