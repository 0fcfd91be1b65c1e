//! Raw character set data. Index is the encoded byte (or two-byte key).

/// Single-byte international set.
pub(crate) static INTERNATIONAL: [Option<char>; 256] = [
    Some(' '), Some('À'), Some('Á'), Some('Â'), Some('Ç'), Some('È'), Some('É'), Some('Ê'), Some('Ë'), Some('Ì'), Some('こ'), Some('Î'), Some('Ï'), Some('Ò'), Some('Ó'), Some('Ô'),
    Some('Œ'), Some('Ù'), Some('Ú'), Some('Û'), Some('Ñ'), Some('ß'), Some('à'), Some('á'), Some('ね'), Some('Ç'), Some('È'), Some('é'), Some('ê'), Some('ë'), Some('ì'), Some('í'),
    Some('î'), Some('ï'), Some('ò'), Some('ó'), Some('ô'), Some('œ'), Some('ù'), Some('ú'), Some('û'), Some('ñ'), Some('º'), Some('ª'), Some('⒅'), Some('&'), Some('+'), Some('あ'),
    Some('ぃ'), Some('ぅ'), Some('ぇ'), Some('ぉ'), Some('ゃ'), Some('='), Some('ょ'), Some('が'), Some('ぎ'), Some('ぐ'), Some('げ'), Some('ご'), Some('ざ'), Some('じ'), Some('ず'), Some('ぜ'),
    Some('ぞ'), Some('だ'), Some('ぢ'), Some('づ'), Some('で'), Some('ど'), Some('ば'), Some('び'), Some('ぶ'), Some('べ'), Some('ぼ'), Some('ぱ'), Some('ぴ'), Some('ぷ'), Some('ぺ'), Some('ぽ'),
    Some('っ'), Some('¿'), Some('¡'), Some('⒆'), Some('⒇'), Some('オ'), Some('カ'), Some('キ'), Some('ク'), Some('ケ'), Some('Í'), Some('コ'), Some('サ'), Some('ス'), Some('セ'), Some('ソ'),
    Some('タ'), Some('チ'), Some('ツ'), Some('テ'), Some('ト'), Some('ナ'), Some('ニ'), Some('ヌ'), Some('â'), Some('ノ'), Some('ハ'), Some('ヒ'), Some('フ'), Some('ヘ'), Some('ホ'), Some('í'),
    Some('ミ'), Some('ム'), Some('メ'), Some('モ'), Some('ヤ'), Some('ユ'), Some('ヨ'), Some('ラ'), Some('リ'), Some('ル'), Some('レ'), Some('ロ'), Some('ワ'), Some('ヲ'), Some('ン'), Some('ァ'),
    Some('ィ'), Some('ゥ'), Some('ェ'), Some('ォ'), Some('ャ'), Some('ュ'), Some('ョ'), Some('ガ'), Some('ギ'), Some('グ'), Some('ゲ'), Some('ゴ'), Some('ザ'), Some('ジ'), Some('ズ'), Some('ゼ'),
    Some('ゾ'), Some('ダ'), Some('ヂ'), Some('ヅ'), Some('デ'), Some('ド'), Some('バ'), Some('ビ'), Some('ブ'), Some('ベ'), Some('ボ'), Some('パ'), Some('ピ'), Some('プ'), Some('ペ'), Some('ポ'),
    Some('ッ'), Some('0'), Some('1'), Some('2'), Some('3'), Some('4'), Some('5'), Some('6'), Some('7'), Some('8'), Some('9'), Some('!'), Some('?'), Some('.'), Some('-'), Some('・'),
    Some('⑬'), Some('“'), Some('”'), Some('‘'), Some('’'), Some('♂'), Some('♀'), Some('$'), Some(','), Some('⑧'), Some('/'), Some('A'), Some('B'), Some('C'), Some('D'), Some('E'),
    Some('F'), Some('G'), Some('H'), Some('I'), Some('J'), Some('K'), Some('L'), Some('M'), Some('N'), Some('O'), Some('P'), Some('Q'), Some('R'), Some('S'), Some('T'), Some('U'),
    Some('V'), Some('W'), Some('X'), Some('Y'), Some('Z'), Some('a'), Some('b'), Some('c'), Some('d'), Some('e'), Some('f'), Some('g'), Some('h'), Some('i'), Some('j'), Some('k'),
    Some('l'), Some('m'), Some('n'), Some('o'), Some('p'), Some('q'), Some('r'), Some('s'), Some('t'), Some('u'), Some('v'), Some('w'), Some('x'), Some('y'), Some('z'), Some('0'),
    Some(':'), Some('Ä'), Some('Ö'), Some('Ü'), Some('ä'), Some('ö'), Some('ü'), None, None, None, None, None, None, None, None, None,
];

/// Single-byte Japanese set.
pub(crate) static JAPANESE: [Option<char>; 256] = [
    Some('　'), Some('あ'), Some('い'), Some('う'), Some('え'), Some('お'), Some('か'), Some('き'), Some('く'), Some('け'), Some('こ'), Some('さ'), Some('し'), Some('す'), Some('せ'), Some('そ'),
    Some('た'), Some('ち'), Some('つ'), Some('て'), Some('と'), Some('な'), Some('に'), Some('ぬ'), Some('ね'), Some('の'), Some('は'), Some('ひ'), Some('ふ'), Some('へ'), Some('ほ'), Some('ま'),
    Some('み'), Some('む'), Some('め'), Some('も'), Some('や'), Some('ゆ'), Some('よ'), Some('ら'), Some('り'), Some('る'), Some('れ'), Some('ろ'), Some('わ'), Some('を'), Some('ん'), Some('ぁ'),
    Some('ぃ'), Some('ぅ'), Some('ぇ'), Some('ぉ'), Some('ゃ'), Some('ゅ'), Some('ょ'), Some('が'), Some('ぎ'), Some('ぐ'), Some('げ'), Some('ご'), Some('ざ'), Some('じ'), Some('ず'), Some('ぜ'),
    Some('ぞ'), Some('だ'), Some('ぢ'), Some('づ'), Some('で'), Some('ど'), Some('ば'), Some('び'), Some('ぶ'), Some('べ'), Some('ぼ'), Some('ぱ'), Some('ぴ'), Some('ぷ'), Some('ぺ'), Some('ぽ'),
    Some('っ'), Some('ア'), Some('イ'), Some('ウ'), Some('エ'), Some('オ'), Some('カ'), Some('キ'), Some('ク'), Some('ケ'), Some('コ'), Some('サ'), Some('シ'), Some('ス'), Some('セ'), Some('ソ'),
    Some('タ'), Some('チ'), Some('ツ'), Some('テ'), Some('ト'), Some('ナ'), Some('ニ'), Some('ヌ'), Some('ネ'), Some('ノ'), Some('ハ'), Some('ヒ'), Some('フ'), Some('ヘ'), Some('ホ'), Some('マ'),
    Some('ミ'), Some('ム'), Some('メ'), Some('モ'), Some('ヤ'), Some('ユ'), Some('ヨ'), Some('ラ'), Some('リ'), Some('ル'), Some('レ'), Some('ロ'), Some('ワ'), Some('ヲ'), Some('ン'), Some('ァ'),
    Some('ィ'), Some('ゥ'), Some('ェ'), Some('ォ'), Some('ャ'), Some('ュ'), Some('ョ'), Some('ガ'), Some('ギ'), Some('グ'), Some('ゲ'), Some('ゴ'), Some('ザ'), Some('ジ'), Some('ズ'), Some('ゼ'),
    Some('ゾ'), Some('ダ'), Some('ヂ'), Some('ヅ'), Some('デ'), Some('ド'), Some('バ'), Some('ビ'), Some('ブ'), Some('ベ'), Some('ボ'), Some('パ'), Some('ピ'), Some('プ'), Some('ペ'), Some('ポ'),
    Some('ッ'), Some('０'), Some('１'), Some('２'), Some('３'), Some('４'), Some('５'), Some('６'), Some('７'), Some('８'), Some('９'), Some('！'), Some('？'), Some('。'), Some('ー'), Some('・'),
    Some('⋯'), Some('『'), Some('』'), Some('「'), Some('」'), Some('♂'), Some('♀'), Some('$'), Some('.'), Some('⑧'), Some('/'), Some('Ａ'), Some('Ｂ'), Some('Ｃ'), Some('Ｄ'), Some('Ｅ'),
    Some('Ｆ'), Some('Ｇ'), Some('Ｈ'), Some('Ｉ'), Some('Ｊ'), Some('Ｋ'), Some('Ｌ'), Some('Ｍ'), Some('Ｎ'), Some('Ｏ'), Some('Ｐ'), Some('Ｑ'), Some('Ｒ'), Some('Ｓ'), Some('Ｔ'), Some('Ｕ'),
    Some('Ｖ'), Some('Ｗ'), Some('Ｘ'), Some('Ｙ'), Some('Ｚ'), Some('ａ'), Some('ｂ'), Some('ｃ'), Some('ｄ'), Some('ｅ'), Some('ｆ'), Some('ｇ'), Some('ｈ'), Some('ｉ'), Some('ｊ'), Some('ｋ'),
    Some('ｌ'), Some('ｍ'), Some('ｎ'), Some('ｏ'), Some('ｐ'), Some('ｑ'), Some('ｒ'), Some('ｓ'), Some('ｔ'), Some('ｕ'), Some('ｖ'), Some('ｗ'), Some('ｘ'), Some('ｙ'), Some('ｚ'), Some('0'),
    Some(':'), Some('Ä'), Some('Ö'), Some('Ü'), Some('ä'), Some('ö'), Some('ü'), None, None, None, None, None, None, None, None, None,
];

/// Two-byte Simplified Chinese extension, keyed by `lead << 8 | trail`.
/// Row 0 is the single-byte set as seen by the extended encoder.
pub(crate) static EXTENDED: [Option<char>; 7936] = [
    // 0x00xx
    Some(' '), None, None, None, None, None, Some('É'), None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, Some('é'), None, None, None, Some('í'),
    Some('î'), Some('ï'), Some('ò'), Some('ó'), Some('ô'), Some('œ'), Some('ù'), Some('ú'), Some('û'), Some('ñ'), Some('º'), Some('ª'), Some('⒅'), Some('&'), Some('+'), Some('あ'),
    Some('ぃ'), Some('ぅ'), Some('ぇ'), Some('ぉ'), Some('ゃ'), Some('='), Some('ょ'), Some('が'), Some('ぎ'), Some('ぐ'), Some('げ'), Some('ご'), Some('ざ'), Some('じ'), Some('ず'), Some('ぜ'),
    Some('ぞ'), Some('だ'), Some('ぢ'), Some('づ'), Some('で'), Some('ど'), Some('ば'), Some('び'), Some('ぶ'), Some('べ'), Some('ぼ'), Some('ぱ'), Some('ぴ'), Some('ぷ'), Some('ぺ'), Some('ぽ'),
    Some('っ'), Some('¿'), Some('¡'), Some('⒆'), Some('⒇'), Some('オ'), Some('カ'), Some('キ'), Some('ク'), Some('ケ'), Some('Í'), Some('コ'), Some('サ'), Some('ス'), Some('セ'), Some('ソ'),
    Some('タ'), Some('チ'), Some('ツ'), Some('テ'), Some('ト'), Some('ナ'), Some('ニ'), Some('ヌ'), Some('â'), Some('ノ'), Some('ハ'), Some('ヒ'), Some('フ'), Some('ヘ'), Some('ホ'), Some('í'),
    Some('ミ'), Some('ム'), Some('メ'), Some('モ'), Some('ヤ'), Some('ユ'), Some('ヨ'), Some('ラ'), Some('リ'), Some('ル'), Some('レ'), Some('ロ'), Some('ワ'), Some('ヲ'), Some('ン'), Some('ァ'),
    Some('ィ'), Some('ゥ'), Some('ェ'), Some('ォ'), Some('ャ'), Some('ュ'), Some('ョ'), Some('ガ'), Some('ギ'), Some('グ'), Some('ゲ'), Some('ゴ'), Some('ザ'), Some('ジ'), Some('ズ'), Some('ゼ'),
    Some('ゾ'), Some('ダ'), Some('ヂ'), Some('ヅ'), Some('デ'), Some('ド'), Some('バ'), Some('ビ'), Some('ブ'), Some('ベ'), Some('ボ'), Some('パ'), Some('ピ'), Some('プ'), Some('ペ'), Some('ポ'),
    Some('ッ'), Some('0'), Some('1'), Some('2'), Some('3'), Some('4'), Some('5'), Some('6'), Some('7'), Some('8'), Some('9'), Some('!'), Some('?'), Some('.'), Some('-'), Some('・'),
    Some('⑬'), Some('“'), Some('”'), Some('‘'), Some('’'), Some('♂'), Some('♀'), Some('$'), Some(','), Some('⑧'), Some('/'), Some('A'), Some('B'), Some('C'), Some('D'), Some('E'),
    Some('F'), Some('G'), Some('H'), Some('I'), Some('J'), Some('K'), Some('L'), Some('M'), Some('N'), Some('O'), Some('P'), Some('Q'), Some('R'), Some('S'), Some('T'), Some('U'),
    Some('V'), Some('W'), Some('X'), Some('Y'), Some('Z'), Some('a'), Some('b'), Some('c'), Some('d'), Some('e'), Some('f'), Some('g'), Some('h'), Some('i'), Some('j'), Some('k'),
    Some('l'), Some('m'), Some('n'), Some('o'), Some('p'), Some('q'), Some('r'), Some('s'), Some('t'), Some('u'), Some('v'), Some('w'), Some('x'), Some('y'), Some('z'), Some('0'),
    Some(':'), Some('Ä'), Some('Ö'), Some('Ü'), Some('ä'), Some('ö'), Some('ü'), None, None, None, None, None, None, None, None, None,
    // 0x01xx
    Some('啊'), Some('阿'), Some('埃'), Some('挨'), Some('哎'), Some('唉'), Some('哀'), Some('皑'), Some('癌'), Some('蔼'), Some('矮'), Some('艾'), Some('碍'), Some('爱'), Some('隘'), Some('鞍'),
    Some('氨'), Some('安'), Some('俺'), Some('按'), Some('暗'), Some('岸'), Some('胺'), Some('案'), Some('肮'), Some('昂'), Some('盎'), Some('凹'), Some('敖'), Some('熬'), Some('翱'), Some('袄'),
    Some('傲'), Some('奥'), Some('懊'), Some('澳'), Some('芭'), Some('捌'), Some('扒'), Some('叭'), Some('吧'), Some('笆'), Some('八'), Some('疤'), Some('巴'), Some('拔'), Some('跋'), Some('靶'),
    Some('把'), Some('耙'), Some('坝'), Some('霸'), Some('罢'), Some('爸'), Some('白'), Some('柏'), Some('百'), Some('摆'), Some('佰'), Some('败'), Some('拜'), Some('稗'), Some('斑'), Some('班'),
    Some('搬'), Some('扳'), Some('般'), Some('颁'), Some('板'), Some('版'), Some('扮'), Some('拌'), Some('伴'), Some('瓣'), Some('半'), Some('办'), Some('绊'), Some('邦'), Some('帮'), Some('梆'),
    Some('榜'), Some('膀'), Some('绑'), Some('棒'), Some('磅'), Some('蚌'), Some('镑'), Some('傍'), Some('谤'), Some('苞'), Some('胞'), Some('包'), Some('褒'), Some('剥'), Some('薄'), Some('雹'),
    Some('保'), Some('堡'), Some('饱'), Some('宝'), Some('抱'), Some('报'), Some('暴'), Some('豹'), Some('鲍'), Some('爆'), Some('杯'), Some('碑'), Some('悲'), Some('卑'), Some('北'), Some('辈'),
    Some('背'), Some('贝'), Some('钡'), Some('倍'), Some('狈'), Some('备'), Some('惫'), Some('焙'), Some('被'), Some('奔'), Some('苯'), Some('本'), Some('笨'), Some('崩'), Some('绷'), Some('甭'),
    Some('泵'), Some('蹦'), Some('迸'), Some('逼'), Some('鼻'), Some('比'), Some('鄙'), Some('笔'), Some('彼'), Some('碧'), Some('蓖'), Some('蔽'), Some('毕'), Some('毙'), Some('毖'), Some('币'),
    Some('庇'), Some('痹'), Some('闭'), Some('敝'), Some('弊'), Some('必'), Some('辟'), Some('壁'), Some('臂'), Some('避'), Some('陛'), Some('鞭'), Some('边'), Some('编'), Some('贬'), Some('扁'),
    Some('便'), Some('变'), Some('卞'), Some('辨'), Some('辩'), Some('辫'), Some('遍'), Some('标'), Some('彪'), Some('膘'), Some('表'), Some('鳖'), Some('憋'), Some('别'), Some('瘪'), Some('彬'),
    Some('斌'), Some('濒'), Some('滨'), Some('宾'), Some('摈'), Some('兵'), Some('冰'), Some('柄'), Some('丙'), Some('秉'), Some('饼'), Some('炳'), Some('病'), Some('并'), Some('玻'), Some('菠'),
    Some('播'), Some('拨'), Some('钵'), Some('波'), Some('博'), Some('勃'), Some('搏'), Some('铂'), Some('箔'), Some('伯'), Some('帛'), Some('舶'), Some('脖'), Some('膊'), Some('渤'), Some('泊'),
    Some('驳'), Some('捕'), Some('卜'), Some('哺'), Some('补'), Some('埠'), Some('不'), Some('布'), Some('步'), Some('簿'), Some('部'), Some('怖'), Some('擦'), Some('猜'), Some('裁'), Some('材'),
    Some('才'), Some('财'), Some('睬'), Some('踩'), Some('采'), Some('彩'), Some('菜'), Some('蔡'), Some('餐'), Some('参'), Some('蚕'), Some('残'), Some('惭'), Some('惨'), Some('灿'), Some('苍'),
    Some('舱'), Some('仓'), Some('沧'), Some('藏'), Some('操'), Some('糙'), Some('槽'), None, None, None, None, None, None, None, None, None,
    // 0x02xx
    Some('曹'), Some('草'), Some('厕'), Some('策'), Some('侧'), Some('册'), Some('测'), Some('层'), Some('蹭'), Some('插'), Some('叉'), Some('茬'), Some('茶'), Some('查'), Some('碴'), Some('搽'),
    Some('察'), Some('岔'), Some('差'), Some('诧'), Some('拆'), Some('柴'), Some('豺'), Some('搀'), Some('掺'), Some('蝉'), Some('馋'), Some('谗'), Some('缠'), Some('铲'), Some('产'), Some('阐'),
    Some('颤'), Some('昌'), Some('猖'), Some('场'), Some('尝'), Some('常'), Some('长'), Some('偿'), Some('肠'), Some('厂'), Some('敞'), Some('畅'), Some('唱'), Some('倡'), Some('超'), Some('抄'),
    Some('钞'), Some('朝'), Some('嘲'), Some('潮'), Some('巢'), Some('吵'), Some('炒'), Some('车'), Some('扯'), Some('撤'), Some('掣'), Some('彻'), Some('澈'), Some('郴'), Some('臣'), Some('辰'),
    Some('尘'), Some('晨'), Some('忱'), Some('沉'), Some('陈'), Some('趁'), Some('衬'), Some('撑'), Some('称'), Some('城'), Some('橙'), Some('成'), Some('呈'), Some('乘'), Some('程'), Some('惩'),
    Some('澄'), Some('诚'), Some('承'), Some('逞'), Some('骋'), Some('秤'), Some('吃'), Some('痴'), Some('持'), Some('匙'), Some('池'), Some('迟'), Some('弛'), Some('驰'), Some('耻'), Some('齿'),
    Some('侈'), Some('尺'), Some('赤'), Some('翅'), Some('斥'), Some('炽'), Some('充'), Some('冲'), Some('虫'), Some('崇'), Some('宠'), Some('抽'), Some('酬'), Some('畴'), Some('踌'), Some('稠'),
    Some('愁'), Some('筹'), Some('仇'), Some('绸'), Some('瞅'), Some('丑'), Some('臭'), Some('初'), Some('出'), Some('橱'), Some('厨'), Some('躇'), Some('锄'), Some('雏'), Some('滁'), Some('除'),
    Some('楚'), Some('础'), Some('储'), Some('矗'), Some('搐'), Some('触'), Some('处'), Some('揣'), Some('川'), Some('穿'), Some('椽'), Some('传'), Some('船'), Some('喘'), Some('串'), Some('疮'),
    Some('窗'), Some('幢'), Some('床'), Some('闯'), Some('创'), Some('吹'), Some('炊'), Some('捶'), Some('锤'), Some('垂'), Some('春'), Some('椿'), Some('醇'), Some('唇'), Some('淳'), Some('纯'),
    Some('蠢'), Some('戳'), Some('绰'), Some('疵'), Some('茨'), Some('磁'), Some('雌'), Some('辞'), Some('慈'), Some('瓷'), Some('词'), Some('此'), Some('刺'), Some('赐'), Some('次'), Some('聪'),
    Some('葱'), Some('囱'), Some('匆'), Some('从'), Some('丛'), Some('凑'), Some('粗'), Some('醋'), Some('簇'), Some('促'), Some('蹿'), Some('篡'), Some('窜'), Some('摧'), Some('崔'), Some('催'),
    Some('脆'), Some('瘁'), Some('粹'), Some('淬'), Some('翠'), Some('村'), Some('存'), Some('寸'), Some('磋'), Some('撮'), Some('搓'), Some('措'), Some('挫'), Some('错'), Some('搭'), Some('达'),
    Some('答'), Some('瘩'), Some('打'), Some('大'), Some('呆'), Some('歹'), Some('傣'), Some('戴'), Some('带'), Some('殆'), Some('代'), Some('贷'), Some('袋'), Some('待'), Some('逮'), Some('怠'),
    Some('耽'), Some('担'), Some('丹'), Some('单'), Some('郸'), Some('掸'), Some('胆'), Some('旦'), Some('氮'), Some('但'), Some('惮'), Some('淡'), Some('诞'), Some('弹'), Some('蛋'), Some('当'),
    Some('挡'), Some('党'), Some('荡'), Some('档'), Some('刀'), Some('捣'), Some('蹈'), None, None, None, None, None, None, None, None, None,
    // 0x03xx
    Some('倒'), Some('岛'), Some('祷'), Some('导'), Some('到'), Some('稻'), Some('悼'), Some('道'), Some('盗'), Some('德'), Some('得'), Some('的'), Some('蹬'), Some('灯'), Some('登'), Some('等'),
    Some('瞪'), Some('凳'), Some('邓'), Some('堤'), Some('低'), Some('滴'), Some('迪'), Some('敌'), Some('笛'), Some('狄'), Some('涤'), Some('翟'), Some('嫡'), Some('抵'), Some('底'), Some('地'),
    Some('蒂'), Some('第'), Some('帝'), Some('弟'), Some('递'), Some('缔'), Some('颠'), Some('掂'), Some('滇'), Some('碘'), Some('点'), Some('典'), Some('靛'), Some('垫'), Some('电'), Some('佃'),
    Some('甸'), Some('店'), Some('惦'), Some('奠'), Some('淀'), Some('殿'), Some('碉'), Some('叼'), Some('雕'), Some('凋'), Some('刁'), Some('掉'), Some('吊'), Some('钓'), Some('调'), Some('跌'),
    Some('爹'), Some('碟'), Some('蝶'), Some('迭'), Some('谍'), Some('叠'), Some('丁'), Some('盯'), Some('叮'), Some('钉'), Some('顶'), Some('鼎'), Some('锭'), Some('定'), Some('订'), Some('丢'),
    Some('东'), Some('冬'), Some('董'), Some('懂'), Some('动'), Some('栋'), Some('侗'), Some('恫'), Some('冻'), Some('洞'), Some('兜'), Some('抖'), Some('斗'), Some('陡'), Some('豆'), Some('逗'),
    Some('痘'), Some('都'), Some('督'), Some('毒'), Some('犊'), Some('独'), Some('读'), Some('堵'), Some('睹'), Some('赌'), Some('杜'), Some('镀'), Some('肚'), Some('度'), Some('渡'), Some('妒'),
    Some('端'), Some('短'), Some('锻'), Some('段'), Some('断'), Some('缎'), Some('堆'), Some('兑'), Some('队'), Some('对'), Some('墩'), Some('吨'), Some('蹲'), Some('敦'), Some('顿'), Some('囤'),
    Some('钝'), Some('盾'), Some('遁'), Some('掇'), Some('哆'), Some('多'), Some('夺'), Some('垛'), Some('躲'), Some('朵'), Some('跺'), Some('舵'), Some('剁'), Some('惰'), Some('堕'), Some('蛾'),
    Some('峨'), Some('鹅'), Some('俄'), Some('额'), Some('讹'), Some('娥'), Some('恶'), Some('厄'), Some('扼'), Some('遏'), Some('鄂'), Some('饿'), Some('恩'), Some('而'), Some('儿'), Some('耳'),
    Some('尔'), Some('饵'), Some('洱'), Some('二'), Some('贰'), Some('发'), Some('罚'), Some('筏'), Some('伐'), Some('乏'), Some('阀'), Some('法'), Some('珐'), Some('藩'), Some('帆'), Some('番'),
    Some('翻'), Some('樊'), Some('矾'), Some('钒'), Some('繁'), Some('凡'), Some('烦'), Some('反'), Some('返'), Some('范'), Some('贩'), Some('犯'), Some('饭'), Some('泛'), Some('坊'), Some('芳'),
    Some('方'), Some('肪'), Some('房'), Some('防'), Some('妨'), Some('仿'), Some('访'), Some('纺'), Some('放'), Some('菲'), Some('非'), Some('啡'), Some('飞'), Some('肥'), Some('匪'), Some('诽'),
    Some('吠'), Some('肺'), Some('废'), Some('沸'), Some('费'), Some('芬'), Some('酚'), Some('吩'), Some('氛'), Some('分'), Some('纷'), Some('坟'), Some('焚'), Some('汾'), Some('粉'), Some('奋'),
    Some('份'), Some('忿'), Some('愤'), Some('粪'), Some('丰'), Some('封'), Some('枫'), Some('蜂'), Some('峰'), Some('锋'), Some('风'), Some('疯'), Some('烽'), Some('逢'), Some('冯'), Some('缝'),
    Some('讽'), Some('奉'), Some('凤'), Some('佛'), Some('否'), Some('夫'), Some('敷'), None, None, None, None, None, None, None, None, None,
    // 0x04xx
    Some('肤'), Some('孵'), Some('扶'), Some('拂'), Some('辐'), Some('幅'), Some('氟'), Some('符'), Some('伏'), Some('俘'), Some('服'), Some('浮'), Some('涪'), Some('福'), Some('袱'), Some('弗'),
    Some('甫'), Some('抚'), Some('辅'), Some('俯'), Some('釜'), Some('斧'), Some('脯'), Some('腑'), Some('府'), Some('腐'), Some('赴'), Some('副'), Some('覆'), Some('赋'), Some('复'), Some('傅'),
    Some('付'), Some('阜'), Some('父'), Some('腹'), Some('负'), Some('富'), Some('讣'), Some('附'), Some('妇'), Some('缚'), Some('咐'), Some('噶'), Some('嘎'), Some('该'), Some('改'), Some('概'),
    Some('钙'), Some('盖'), Some('溉'), Some('干'), Some('甘'), Some('杆'), Some('柑'), Some('竿'), Some('肝'), Some('赶'), Some('感'), Some('秆'), Some('敢'), Some('赣'), Some('冈'), Some('刚'),
    Some('钢'), Some('缸'), Some('肛'), Some('纲'), Some('岗'), Some('港'), Some('杠'), Some('篙'), Some('皋'), Some('高'), Some('膏'), Some('羔'), Some('糕'), Some('搞'), Some('镐'), Some('稿'),
    Some('告'), Some('哥'), Some('歌'), Some('搁'), Some('戈'), Some('鸽'), Some('胳'), Some('疙'), Some('割'), Some('革'), Some('葛'), Some('格'), Some('蛤'), Some('阁'), Some('隔'), Some('铬'),
    Some('个'), Some('各'), Some('给'), Some('根'), Some('跟'), Some('耕'), Some('更'), Some('庚'), Some('羹'), Some('埂'), Some('耿'), Some('梗'), Some('工'), Some('攻'), Some('功'), Some('恭'),
    Some('龚'), Some('供'), Some('躬'), Some('公'), Some('宫'), Some('弓'), Some('巩'), Some('汞'), Some('拱'), Some('贡'), Some('共'), Some('钩'), Some('勾'), Some('沟'), Some('苟'), Some('狗'),
    Some('垢'), Some('构'), Some('购'), Some('够'), Some('辜'), Some('菇'), Some('咕'), Some('箍'), Some('估'), Some('沽'), Some('孤'), Some('姑'), Some('鼓'), Some('古'), Some('蛊'), Some('骨'),
    Some('谷'), Some('股'), Some('故'), Some('顾'), Some('固'), Some('雇'), Some('刮'), Some('瓜'), Some('剐'), Some('寡'), Some('挂'), Some('褂'), Some('乖'), Some('拐'), Some('怪'), Some('棺'),
    Some('关'), Some('官'), Some('冠'), Some('观'), Some('管'), Some('馆'), Some('罐'), Some('惯'), Some('灌'), Some('贯'), Some('光'), Some('广'), Some('逛'), Some('瑰'), Some('规'), Some('圭'),
    Some('硅'), Some('归'), Some('龟'), Some('闺'), Some('轨'), Some('鬼'), Some('诡'), Some('癸'), Some('桂'), Some('柜'), Some('跪'), Some('贵'), Some('刽'), Some('辊'), Some('滚'), Some('棍'),
    Some('锅'), Some('郭'), Some('国'), Some('果'), Some('裹'), Some('过'), Some('哈'), Some('骸'), Some('孩'), Some('海'), Some('氦'), Some('亥'), Some('害'), Some('骇'), Some('酣'), Some('憨'),
    Some('邯'), Some('韩'), Some('含'), Some('涵'), Some('寒'), Some('函'), Some('喊'), Some('罕'), Some('翰'), Some('撼'), Some('捍'), Some('旱'), Some('憾'), Some('悍'), Some('焊'), Some('汗'),
    Some('汉'), Some('夯'), Some('杭'), Some('航'), Some('壕'), Some('嚎'), Some('豪'), Some('毫'), Some('郝'), Some('好'), Some('耗'), Some('号'), Some('浩'), Some('呵'), Some('喝'), Some('荷'),
    Some('菏'), Some('核'), Some('禾'), Some('和'), Some('何'), Some('合'), Some('盒'), None, None, None, None, None, None, None, None, None,
    // 0x05xx
    Some('貉'), Some('阂'), Some('河'), Some('涸'), Some('赫'), Some('褐'), Some('鹤'), Some('贺'), Some('嘿'), Some('黑'), Some('痕'), Some('很'), Some('狠'), Some('恨'), Some('哼'), Some('亨'),
    Some('横'), Some('衡'), Some('恒'), Some('轰'), Some('哄'), Some('烘'), Some('虹'), Some('鸿'), Some('洪'), Some('宏'), Some('弘'), Some('红'), Some('喉'), Some('侯'), Some('猴'), Some('吼'),
    Some('厚'), Some('候'), Some('后'), Some('呼'), Some('乎'), Some('忽'), Some('瑚'), Some('壶'), Some('葫'), Some('胡'), Some('蝴'), Some('狐'), Some('糊'), Some('湖'), Some('弧'), Some('虎'),
    Some('唬'), Some('护'), Some('互'), Some('沪'), Some('户'), Some('花'), Some('哗'), Some('华'), Some('猾'), Some('滑'), Some('画'), Some('划'), Some('化'), Some('话'), Some('槐'), Some('徊'),
    Some('怀'), Some('淮'), Some('坏'), Some('欢'), Some('环'), Some('桓'), Some('还'), Some('缓'), Some('换'), Some('患'), Some('唤'), Some('痪'), Some('豢'), Some('焕'), Some('涣'), Some('宦'),
    Some('幻'), Some('荒'), Some('慌'), Some('黄'), Some('磺'), Some('蝗'), Some('簧'), Some('皇'), Some('凰'), Some('惶'), Some('煌'), Some('晃'), Some('幌'), Some('恍'), Some('谎'), Some('灰'),
    Some('挥'), Some('辉'), Some('徽'), Some('恢'), Some('蛔'), Some('回'), Some('毁'), Some('悔'), Some('慧'), Some('卉'), Some('惠'), Some('晦'), Some('贿'), Some('秽'), Some('会'), Some('烩'),
    Some('汇'), Some('讳'), Some('诲'), Some('绘'), Some('荤'), Some('昏'), Some('婚'), Some('魂'), Some('浑'), Some('混'), Some('豁'), Some('活'), Some('伙'), Some('火'), Some('获'), Some('或'),
    Some('惑'), Some('霍'), Some('货'), Some('祸'), Some('击'), Some('圾'), Some('基'), Some('机'), Some('畸'), Some('稽'), Some('积'), Some('箕'), Some('肌'), Some('饥'), Some('迹'), Some('激'),
    Some('讥'), Some('鸡'), Some('姬'), Some('绩'), Some('缉'), Some('吉'), Some('极'), Some('棘'), Some('辑'), Some('籍'), Some('集'), Some('及'), Some('急'), Some('疾'), Some('汲'), Some('即'),
    Some('嫉'), Some('级'), Some('挤'), Some('几'), Some('脊'), Some('己'), Some('蓟'), Some('技'), Some('冀'), Some('季'), Some('伎'), Some('祭'), Some('剂'), Some('悸'), Some('济'), Some('寄'),
    Some('寂'), Some('计'), Some('记'), Some('既'), Some('忌'), Some('际'), Some('妓'), Some('继'), Some('纪'), Some('嘉'), Some('枷'), Some('夹'), Some('佳'), Some('家'), Some('加'), Some('荚'),
    Some('颊'), Some('贾'), Some('甲'), Some('钾'), Some('假'), Some('稼'), Some('价'), Some('架'), Some('驾'), Some('嫁'), Some('歼'), Some('监'), Some('坚'), Some('尖'), Some('笺'), Some('间'),
    Some('煎'), Some('兼'), Some('肩'), Some('艰'), Some('奸'), Some('缄'), Some('茧'), Some('检'), Some('柬'), Some('碱'), Some('硷'), Some('拣'), Some('捡'), Some('简'), Some('俭'), Some('剪'),
    Some('减'), Some('荐'), Some('槛'), Some('鉴'), Some('践'), Some('贱'), Some('见'), Some('键'), Some('箭'), Some('件'), Some('健'), Some('舰'), Some('剑'), Some('饯'), Some('渐'), Some('溅'),
    Some('涧'), Some('建'), Some('僵'), Some('姜'), Some('将'), Some('浆'), Some('江'), None, None, None, None, None, None, None, None, None,
    // 0x06xx
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    // 0x07xx
    Some('疆'), Some('蒋'), Some('桨'), Some('奖'), Some('讲'), Some('匠'), Some('酱'), Some('降'), Some('蕉'), Some('椒'), Some('礁'), Some('焦'), Some('胶'), Some('交'), Some('郊'), Some('浇'),
    Some('骄'), Some('娇'), Some('嚼'), Some('搅'), Some('铰'), Some('矫'), Some('侥'), Some('脚'), Some('狡'), Some('角'), Some('饺'), Some('缴'), Some('绞'), Some('剿'), Some('教'), Some('酵'),
    Some('轿'), Some('较'), Some('叫'), Some('窖'), Some('揭'), Some('接'), Some('皆'), Some('秸'), Some('街'), Some('阶'), Some('截'), Some('劫'), Some('节'), Some('桔'), Some('杰'), Some('捷'),
    Some('睫'), Some('竭'), Some('洁'), Some('结'), Some('解'), Some('姐'), Some('戒'), Some('藉'), Some('芥'), Some('界'), Some('借'), Some('介'), Some('疥'), Some('诫'), Some('届'), Some('巾'),
    Some('筋'), Some('斤'), Some('金'), Some('今'), Some('津'), Some('襟'), Some('紧'), Some('锦'), Some('仅'), Some('谨'), Some('进'), Some('靳'), Some('晋'), Some('禁'), Some('近'), Some('烬'),
    Some('浸'), Some('尽'), Some('劲'), Some('荆'), Some('兢'), Some('茎'), Some('睛'), Some('晶'), Some('鲸'), Some('京'), Some('惊'), Some('精'), Some('粳'), Some('经'), Some('井'), Some('警'),
    Some('景'), Some('颈'), Some('静'), Some('境'), Some('敬'), Some('镜'), Some('径'), Some('痉'), Some('靖'), Some('竟'), Some('竞'), Some('净'), Some('炯'), Some('窘'), Some('揪'), Some('究'),
    Some('纠'), Some('玖'), Some('韭'), Some('久'), Some('灸'), Some('九'), Some('酒'), Some('厩'), Some('救'), Some('旧'), Some('臼'), Some('舅'), Some('咎'), Some('就'), Some('疚'), Some('鞠'),
    Some('拘'), Some('狙'), Some('疽'), Some('居'), Some('驹'), Some('菊'), Some('局'), Some('咀'), Some('矩'), Some('举'), Some('沮'), Some('聚'), Some('拒'), Some('据'), Some('巨'), Some('具'),
    Some('距'), Some('踞'), Some('锯'), Some('俱'), Some('句'), Some('惧'), Some('炬'), Some('剧'), Some('捐'), Some('鹃'), Some('娟'), Some('倦'), Some('眷'), Some('卷'), Some('绢'), Some('撅'),
    Some('攫'), Some('抉'), Some('掘'), Some('倔'), Some('爵'), Some('觉'), Some('决'), Some('诀'), Some('绝'), Some('均'), Some('菌'), Some('钧'), Some('军'), Some('君'), Some('峻'), Some('俊'),
    Some('竣'), Some('浚'), Some('郡'), Some('骏'), Some('喀'), Some('咖'), Some('卡'), Some('咯'), Some('开'), Some('揩'), Some('楷'), Some('凯'), Some('慨'), Some('刊'), Some('堪'), Some('勘'),
    Some('坎'), Some('砍'), Some('看'), Some('康'), Some('慷'), Some('糠'), Some('扛'), Some('抗'), Some('亢'), Some('炕'), Some('考'), Some('拷'), Some('烤'), Some('靠'), Some('坷'), Some('苛'),
    Some('柯'), Some('棵'), Some('磕'), Some('颗'), Some('科'), Some('壳'), Some('咳'), Some('可'), Some('渴'), Some('克'), Some('刻'), Some('客'), Some('课'), Some('肯'), Some('啃'), Some('垦'),
    Some('恳'), Some('坑'), Some('吭'), Some('空'), Some('恐'), Some('孔'), Some('控'), Some('抠'), Some('口'), Some('扣'), Some('寇'), Some('枯'), Some('哭'), Some('窟'), Some('苦'), Some('酷'),
    Some('库'), Some('裤'), Some('夸'), Some('垮'), Some('挎'), Some('跨'), Some('胯'), None, None, None, None, None, None, None, None, None,
    // 0x08xx
    Some('块'), Some('筷'), Some('侩'), Some('快'), Some('宽'), Some('款'), Some('匡'), Some('筐'), Some('狂'), Some('框'), Some('矿'), Some('眶'), Some('旷'), Some('况'), Some('亏'), Some('盔'),
    Some('岿'), Some('窥'), Some('葵'), Some('奎'), Some('魁'), Some('傀'), Some('馈'), Some('愧'), Some('溃'), Some('坤'), Some('昆'), Some('捆'), Some('困'), Some('括'), Some('扩'), Some('廓'),
    Some('阔'), Some('垃'), Some('拉'), Some('喇'), Some('蜡'), Some('腊'), Some('辣'), Some('啦'), Some('莱'), Some('来'), Some('赖'), Some('蓝'), Some('婪'), Some('栏'), Some('拦'), Some('篮'),
    Some('阑'), Some('兰'), Some('澜'), Some('谰'), Some('揽'), Some('览'), Some('懒'), Some('缆'), Some('烂'), Some('滥'), Some('琅'), Some('榔'), Some('狼'), Some('廊'), Some('郎'), Some('朗'),
    Some('浪'), Some('捞'), Some('劳'), Some('牢'), Some('老'), Some('佬'), Some('姥'), Some('酪'), Some('烙'), Some('涝'), Some('勒'), Some('乐'), Some('雷'), Some('镭'), Some('蕾'), Some('磊'),
    Some('累'), Some('儡'), Some('垒'), Some('擂'), Some('肋'), Some('类'), Some('泪'), Some('棱'), Some('楞'), Some('冷'), Some('厘'), Some('梨'), Some('犁'), Some('黎'), Some('篱'), Some('狸'),
    Some('离'), Some('漓'), Some('理'), Some('李'), Some('里'), Some('鲤'), Some('礼'), Some('莉'), Some('荔'), Some('吏'), Some('栗'), Some('丽'), Some('厉'), Some('励'), Some('砾'), Some('历'),
    Some('利'), Some('傈'), Some('例'), Some('俐'), Some('痢'), Some('立'), Some('粒'), Some('沥'), Some('隶'), Some('力'), Some('璃'), Some('哩'), Some('俩'), Some('联'), Some('莲'), Some('连'),
    Some('镰'), Some('廉'), Some('怜'), Some('涟'), Some('帘'), Some('敛'), Some('脸'), Some('链'), Some('恋'), Some('炼'), Some('练'), Some('粮'), Some('凉'), Some('梁'), Some('粱'), Some('良'),
    Some('两'), Some('辆'), Some('量'), Some('晾'), Some('亮'), Some('谅'), Some('撩'), Some('聊'), Some('僚'), Some('疗'), Some('燎'), Some('寥'), Some('辽'), Some('潦'), Some('了'), Some('撂'),
    Some('镣'), Some('廖'), Some('料'), Some('列'), Some('裂'), Some('烈'), Some('劣'), Some('猎'), Some('琳'), Some('林'), Some('磷'), Some('霖'), Some('临'), Some('邻'), Some('鳞'), Some('淋'),
    Some('凛'), Some('赁'), Some('吝'), Some('拎'), Some('玲'), Some('菱'), Some('零'), Some('龄'), Some('铃'), Some('伶'), Some('羚'), Some('凌'), Some('灵'), Some('陵'), Some('岭'), Some('领'),
    Some('另'), Some('令'), Some('溜'), Some('琉'), Some('榴'), Some('硫'), Some('馏'), Some('留'), Some('刘'), Some('瘤'), Some('流'), Some('柳'), Some('六'), Some('龙'), Some('聋'), Some('咙'),
    Some('笼'), Some('窿'), Some('隆'), Some('垄'), Some('拢'), Some('陇'), Some('楼'), Some('娄'), Some('搂'), Some('篓'), Some('漏'), Some('陋'), Some('芦'), Some('卢'), Some('颅'), Some('庐'),
    Some('炉'), Some('掳'), Some('卤'), Some('虏'), Some('鲁'), Some('麓'), Some('碌'), Some('露'), Some('路'), Some('赂'), Some('鹿'), Some('潞'), Some('禄'), Some('录'), Some('陆'), Some('戮'),
    Some('驴'), Some('吕'), Some('铝'), Some('侣'), Some('旅'), Some('履'), Some('屡'), None, None, None, None, None, None, None, None, None,
    // 0x09xx
    Some('缕'), Some('虑'), Some('氯'), Some('律'), Some('率'), Some('滤'), Some('绿'), Some('峦'), Some('挛'), Some('孪'), Some('滦'), Some('卵'), Some('乱'), Some('掠'), Some('略'), Some('抡'),
    Some('轮'), Some('伦'), Some('仑'), Some('沦'), Some('纶'), Some('论'), Some('萝'), Some('螺'), Some('罗'), Some('逻'), Some('锣'), Some('箩'), Some('骡'), Some('裸'), Some('落'), Some('洛'),
    Some('骆'), Some('络'), Some('妈'), Some('麻'), Some('玛'), Some('码'), Some('蚂'), Some('马'), Some('骂'), Some('嘛'), Some('吗'), Some('埋'), Some('买'), Some('麦'), Some('卖'), Some('迈'),
    Some('脉'), Some('瞒'), Some('馒'), Some('蛮'), Some('满'), Some('蔓'), Some('曼'), Some('慢'), Some('漫'), Some('谩'), Some('芒'), Some('茫'), Some('盲'), Some('氓'), Some('忙'), Some('莽'),
    Some('猫'), Some('茅'), Some('锚'), Some('毛'), Some('矛'), Some('铆'), Some('卯'), Some('茂'), Some('冒'), Some('帽'), Some('貌'), Some('贸'), Some('么'), Some('玫'), Some('枚'), Some('梅'),
    Some('酶'), Some('霉'), Some('煤'), Some('没'), Some('眉'), Some('媒'), Some('镁'), Some('每'), Some('美'), Some('昧'), Some('寐'), Some('妹'), Some('媚'), Some('门'), Some('闷'), Some('们'),
    Some('萌'), Some('蒙'), Some('檬'), Some('盟'), Some('锰'), Some('猛'), Some('梦'), Some('孟'), Some('眯'), Some('醚'), Some('靡'), Some('糜'), Some('迷'), Some('谜'), Some('弥'), Some('米'),
    Some('秘'), Some('觅'), Some('泌'), Some('蜜'), Some('密'), Some('幂'), Some('棉'), Some('眠'), Some('绵'), Some('冕'), Some('免'), Some('勉'), Some('娩'), Some('缅'), Some('面'), Some('苗'),
    Some('描'), Some('瞄'), Some('藐'), Some('秒'), Some('渺'), Some('庙'), Some('妙'), Some('蔑'), Some('灭'), Some('民'), Some('抿'), Some('皿'), Some('敏'), Some('悯'), Some('闽'), Some('明'),
    Some('螟'), Some('鸣'), Some('铭'), Some('名'), Some('命'), Some('谬'), Some('摸'), Some('摹'), Some('蘑'), Some('模'), Some('膜'), Some('磨'), Some('摩'), Some('魔'), Some('抹'), Some('末'),
    Some('莫'), Some('墨'), Some('默'), Some('沫'), Some('漠'), Some('寞'), Some('陌'), Some('谋'), Some('牟'), Some('某'), Some('拇'), Some('牡'), Some('亩'), Some('姆'), Some('母'), Some('墓'),
    Some('暮'), Some('幕'), Some('募'), Some('慕'), Some('木'), Some('目'), Some('睦'), Some('牧'), Some('穆'), Some('拿'), Some('哪'), Some('呐'), Some('钠'), Some('那'), Some('娜'), Some('纳'),
    Some('氖'), Some('乃'), Some('奶'), Some('耐'), Some('奈'), Some('南'), Some('男'), Some('难'), Some('囊'), Some('挠'), Some('脑'), Some('恼'), Some('闹'), Some('淖'), Some('呢'), Some('馁'),
    Some('内'), Some('嫩'), Some('能'), Some('妮'), Some('霓'), Some('倪'), Some('泥'), Some('尼'), Some('拟'), Some('你'), Some('匿'), Some('腻'), Some('逆'), Some('溺'), Some('蔫'), Some('拈'),
    Some('年'), Some('碾'), Some('撵'), Some('捻'), Some('念'), Some('娘'), Some('酿'), Some('鸟'), Some('尿'), Some('捏'), Some('聂'), Some('孽'), Some('啮'), Some('镊'), Some('镍'), Some('涅'),
    Some('您'), Some('柠'), Some('狞'), Some('凝'), Some('宁'), Some('拧'), Some('泞'), None, None, None, None, None, None, None, None, None,
    // 0x0Axx
    Some('牛'), Some('扭'), Some('钮'), Some('纽'), Some('脓'), Some('浓'), Some('农'), Some('弄'), Some('奴'), Some('努'), Some('怒'), Some('女'), Some('暖'), Some('虐'), Some('疟'), Some('挪'),
    Some('懦'), Some('糯'), Some('诺'), Some('哦'), Some('欧'), Some('鸥'), Some('殴'), Some('藕'), Some('呕'), Some('偶'), Some('沤'), Some('啪'), Some('趴'), Some('爬'), Some('帕'), Some('怕'),
    Some('琶'), Some('拍'), Some('排'), Some('牌'), Some('徘'), Some('湃'), Some('派'), Some('攀'), Some('潘'), Some('盘'), Some('磐'), Some('盼'), Some('畔'), Some('判'), Some('叛'), Some('乓'),
    Some('庞'), Some('旁'), Some('耪'), Some('胖'), Some('抛'), Some('咆'), Some('刨'), Some('炮'), Some('袍'), Some('跑'), Some('泡'), Some('呸'), Some('胚'), Some('培'), Some('裴'), Some('赔'),
    Some('陪'), Some('配'), Some('佩'), Some('沛'), Some('喷'), Some('盆'), Some('砰'), Some('抨'), Some('烹'), Some('澎'), Some('彭'), Some('蓬'), Some('棚'), Some('硼'), Some('篷'), Some('膨'),
    Some('朋'), Some('鹏'), Some('捧'), Some('碰'), Some('坯'), Some('砒'), Some('霹'), Some('批'), Some('披'), Some('劈'), Some('琵'), Some('毗'), Some('啤'), Some('脾'), Some('疲'), Some('皮'),
    Some('匹'), Some('痞'), Some('僻'), Some('屁'), Some('譬'), Some('篇'), Some('偏'), Some('片'), Some('骗'), Some('飘'), Some('漂'), Some('瓢'), Some('票'), Some('撇'), Some('瞥'), Some('拼'),
    Some('频'), Some('贫'), Some('品'), Some('聘'), Some('乒'), Some('坪'), Some('苹'), Some('萍'), Some('平'), Some('凭'), Some('瓶'), Some('评'), Some('屏'), Some('坡'), Some('泼'), Some('颇'),
    Some('婆'), Some('破'), Some('魄'), Some('迫'), Some('粕'), Some('剖'), Some('扑'), Some('铺'), Some('仆'), Some('莆'), Some('葡'), Some('菩'), Some('蒲'), Some('埔'), Some('朴'), Some('圃'),
    Some('普'), Some('浦'), Some('谱'), Some('曝'), Some('瀑'), Some('期'), Some('欺'), Some('栖'), Some('戚'), Some('妻'), Some('七'), Some('凄'), Some('漆'), Some('柒'), Some('沏'), Some('其'),
    Some('棋'), Some('奇'), Some('歧'), Some('畦'), Some('崎'), Some('脐'), Some('齐'), Some('旗'), Some('祈'), Some('祁'), Some('骑'), Some('起'), Some('岂'), Some('乞'), Some('企'), Some('启'),
    Some('契'), Some('砌'), Some('器'), Some('气'), Some('迄'), Some('弃'), Some('汽'), Some('泣'), Some('讫'), Some('掐'), Some('恰'), Some('洽'), Some('牵'), Some('扦'), Some('钎'), Some('铅'),
    Some('千'), Some('迁'), Some('签'), Some('仟'), Some('谦'), Some('乾'), Some('黔'), Some('钱'), Some('钳'), Some('前'), Some('潜'), Some('遣'), Some('浅'), Some('谴'), Some('堑'), Some('嵌'),
    Some('欠'), Some('歉'), Some('枪'), Some('呛'), Some('腔'), Some('羌'), Some('墙'), Some('蔷'), Some('强'), Some('抢'), Some('橇'), Some('锹'), Some('敲'), Some('悄'), Some('桥'), Some('瞧'),
    Some('乔'), Some('侨'), Some('巧'), Some('鞘'), Some('撬'), Some('翘'), Some('峭'), Some('俏'), Some('窍'), Some('切'), Some('茄'), Some('且'), Some('怯'), Some('窃'), Some('钦'), Some('侵'),
    Some('亲'), Some('秦'), Some('琴'), Some('勤'), Some('芹'), Some('擒'), Some('禽'), None, None, None, None, None, None, None, None, None,
    // 0x0Bxx
    Some('寝'), Some('沁'), Some('青'), Some('轻'), Some('氢'), Some('倾'), Some('卿'), Some('清'), Some('擎'), Some('晴'), Some('氰'), Some('情'), Some('顷'), Some('请'), Some('庆'), Some('琼'),
    Some('穷'), Some('秋'), Some('丘'), Some('邱'), Some('球'), Some('求'), Some('囚'), Some('酋'), Some('泅'), Some('趋'), Some('区'), Some('蛆'), Some('曲'), Some('躯'), Some('屈'), Some('驱'),
    Some('渠'), Some('取'), Some('娶'), Some('龋'), Some('趣'), Some('去'), Some('圈'), Some('颧'), Some('权'), Some('醛'), Some('泉'), Some('全'), Some('痊'), Some('拳'), Some('犬'), Some('券'),
    Some('劝'), Some('缺'), Some('炔'), Some('瘸'), Some('却'), Some('鹊'), Some('榷'), Some('确'), Some('雀'), Some('裙'), Some('群'), Some('然'), Some('燃'), Some('冉'), Some('染'), Some('瓤'),
    Some('壤'), Some('攘'), Some('嚷'), Some('让'), Some('饶'), Some('扰'), Some('绕'), Some('惹'), Some('热'), Some('壬'), Some('仁'), Some('人'), Some('忍'), Some('韧'), Some('任'), Some('认'),
    Some('刃'), Some('妊'), Some('纫'), Some('扔'), Some('仍'), Some('日'), Some('戎'), Some('茸'), Some('蓉'), Some('荣'), Some('融'), Some('熔'), Some('溶'), Some('容'), Some('绒'), Some('冗'),
    Some('揉'), Some('柔'), Some('肉'), Some('茹'), Some('蠕'), Some('儒'), Some('孺'), Some('如'), Some('辱'), Some('乳'), Some('汝'), Some('入'), Some('褥'), Some('软'), Some('阮'), Some('蕊'),
    Some('瑞'), Some('锐'), Some('闰'), Some('润'), Some('若'), Some('弱'), Some('撒'), Some('洒'), Some('萨'), Some('腮'), Some('鳃'), Some('塞'), Some('赛'), Some('三'), Some('叁'), Some('伞'),
    Some('散'), Some('桑'), Some('嗓'), Some('丧'), Some('搔'), Some('骚'), Some('扫'), Some('嫂'), Some('瑟'), Some('色'), Some('涩'), Some('森'), Some('僧'), Some('莎'), Some('砂'), Some('杀'),
    Some('刹'), Some('沙'), Some('纱'), Some('傻'), Some('啥'), Some('煞'), Some('筛'), Some('晒'), Some('珊'), Some('苫'), Some('杉'), Some('山'), Some('删'), Some('煽'), Some('衫'), Some('闪'),
    Some('陕'), Some('擅'), Some('赡'), Some('膳'), Some('善'), Some('汕'), Some('扇'), Some('缮'), Some('墒'), Some('伤'), Some('商'), Some('赏'), Some('晌'), Some('上'), Some('尚'), Some('裳'),
    Some('梢'), Some('捎'), Some('稍'), Some('烧'), Some('芍'), Some('勺'), Some('韶'), Some('少'), Some('哨'), Some('邵'), Some('绍'), Some('奢'), Some('赊'), Some('蛇'), Some('舌'), Some('舍'),
    Some('赦'), Some('摄'), Some('射'), Some('慑'), Some('涉'), Some('社'), Some('设'), Some('砷'), Some('申'), Some('呻'), Some('伸'), Some('身'), Some('深'), Some('娠'), Some('绅'), Some('神'),
    Some('沈'), Some('审'), Some('婶'), Some('甚'), Some('肾'), Some('慎'), Some('渗'), Some('声'), Some('生'), Some('甥'), Some('牲'), Some('升'), Some('绳'), Some('省'), Some('盛'), Some('剩'),
    Some('胜'), Some('圣'), Some('师'), Some('失'), Some('狮'), Some('施'), Some('湿'), Some('诗'), Some('尸'), Some('虱'), Some('十'), Some('石'), Some('拾'), Some('时'), Some('什'), Some('食'),
    Some('蚀'), Some('实'), Some('识'), Some('史'), Some('矢'), Some('使'), Some('屎'), None, None, None, None, None, None, None, None, None,
    // 0x0Cxx
    Some('驶'), Some('始'), Some('式'), Some('示'), Some('士'), Some('世'), Some('柿'), Some('事'), Some('拭'), Some('誓'), Some('逝'), Some('势'), Some('是'), Some('嗜'), Some('噬'), Some('适'),
    Some('仕'), Some('侍'), Some('释'), Some('饰'), Some('氏'), Some('市'), Some('恃'), Some('室'), Some('视'), Some('试'), Some('收'), Some('手'), Some('首'), Some('守'), Some('寿'), Some('授'),
    Some('售'), Some('受'), Some('瘦'), Some('兽'), Some('蔬'), Some('枢'), Some('梳'), Some('殊'), Some('抒'), Some('输'), Some('叔'), Some('舒'), Some('淑'), Some('疏'), Some('书'), Some('赎'),
    Some('孰'), Some('熟'), Some('薯'), Some('暑'), Some('曙'), Some('署'), Some('蜀'), Some('黍'), Some('鼠'), Some('属'), Some('术'), Some('述'), Some('树'), Some('束'), Some('戍'), Some('竖'),
    Some('墅'), Some('庶'), Some('数'), Some('漱'), Some('恕'), Some('刷'), Some('耍'), Some('摔'), Some('衰'), Some('甩'), Some('帅'), Some('栓'), Some('拴'), Some('霜'), Some('双'), Some('爽'),
    Some('谁'), Some('水'), Some('睡'), Some('税'), Some('吮'), Some('瞬'), Some('顺'), Some('舜'), Some('说'), Some('硕'), Some('朔'), Some('烁'), Some('斯'), Some('撕'), Some('嘶'), Some('思'),
    Some('私'), Some('司'), Some('丝'), Some('死'), Some('肆'), Some('寺'), Some('嗣'), Some('四'), Some('伺'), Some('似'), Some('饲'), Some('巳'), Some('松'), Some('耸'), Some('怂'), Some('颂'),
    Some('送'), Some('宋'), Some('讼'), Some('诵'), Some('搜'), Some('艘'), Some('擞'), Some('嗽'), Some('苏'), Some('酥'), Some('俗'), Some('素'), Some('速'), Some('粟'), Some('僳'), Some('塑'),
    Some('溯'), Some('宿'), Some('诉'), Some('肃'), Some('酸'), Some('蒜'), Some('算'), Some('虽'), Some('隋'), Some('随'), Some('绥'), Some('髓'), Some('碎'), Some('岁'), Some('穗'), Some('遂'),
    Some('隧'), Some('祟'), Some('孙'), Some('损'), Some('笋'), Some('蓑'), Some('梭'), Some('唆'), Some('缩'), Some('琐'), Some('索'), Some('锁'), Some('所'), Some('塌'), Some('他'), Some('它'),
    Some('她'), Some('塔'), Some('獭'), Some('挞'), Some('蹋'), Some('踏'), Some('胎'), Some('苔'), Some('抬'), Some('台'), Some('泰'), Some('酞'), Some('太'), Some('态'), Some('汰'), Some('坍'),
    Some('摊'), Some('贪'), Some('瘫'), Some('滩'), Some('坛'), Some('檀'), Some('痰'), Some('潭'), Some('谭'), Some('谈'), Some('坦'), Some('毯'), Some('袒'), Some('碳'), Some('探'), Some('叹'),
    Some('炭'), Some('汤'), Some('塘'), Some('搪'), Some('堂'), Some('棠'), Some('膛'), Some('唐'), Some('糖'), Some('倘'), Some('躺'), Some('淌'), Some('趟'), Some('烫'), Some('掏'), Some('涛'),
    Some('滔'), Some('绦'), Some('萄'), Some('桃'), Some('逃'), Some('淘'), Some('陶'), Some('讨'), Some('套'), Some('特'), Some('藤'), Some('腾'), Some('疼'), Some('誊'), Some('梯'), Some('剔'),
    Some('踢'), Some('锑'), Some('提'), Some('题'), Some('蹄'), Some('啼'), Some('体'), Some('替'), Some('嚏'), Some('惕'), Some('涕'), Some('剃'), Some('屉'), Some('天'), Some('添'), Some('填'),
    Some('田'), Some('甜'), Some('恬'), Some('舔'), Some('腆'), Some('挑'), Some('条'), None, None, None, None, None, None, None, None, None,
    // 0x0Dxx
    Some('迢'), Some('眺'), Some('跳'), Some('贴'), Some('铁'), Some('帖'), Some('厅'), Some('听'), Some('烃'), Some('汀'), Some('廷'), Some('停'), Some('亭'), Some('庭'), Some('挺'), Some('艇'),
    Some('通'), Some('桐'), Some('酮'), Some('瞳'), Some('同'), Some('铜'), Some('彤'), Some('童'), Some('桶'), Some('捅'), Some('筒'), Some('统'), Some('痛'), Some('偷'), Some('投'), Some('头'),
    Some('透'), Some('凸'), Some('秃'), Some('突'), Some('图'), Some('徒'), Some('途'), Some('涂'), Some('屠'), Some('土'), Some('吐'), Some('兔'), Some('湍'), Some('团'), Some('推'), Some('颓'),
    Some('腿'), Some('蜕'), Some('褪'), Some('退'), Some('吞'), Some('屯'), Some('臀'), Some('拖'), Some('托'), Some('脱'), Some('鸵'), Some('陀'), Some('驮'), Some('驼'), Some('椭'), Some('妥'),
    Some('拓'), Some('唾'), Some('挖'), Some('哇'), Some('蛙'), Some('洼'), Some('娃'), Some('瓦'), Some('袜'), Some('歪'), Some('外'), Some('豌'), Some('弯'), Some('湾'), Some('玩'), Some('顽'),
    Some('丸'), Some('烷'), Some('完'), Some('碗'), Some('挽'), Some('晚'), Some('皖'), Some('惋'), Some('宛'), Some('婉'), Some('万'), Some('腕'), Some('汪'), Some('王'), Some('亡'), Some('枉'),
    Some('网'), Some('往'), Some('旺'), Some('望'), Some('忘'), Some('妄'), Some('威'), Some('巍'), Some('微'), Some('危'), Some('韦'), Some('违'), Some('桅'), Some('围'), Some('唯'), Some('惟'),
    Some('为'), Some('潍'), Some('维'), Some('苇'), Some('萎'), Some('委'), Some('伟'), Some('伪'), Some('尾'), Some('纬'), Some('未'), Some('蔚'), Some('味'), Some('畏'), Some('胃'), Some('喂'),
    Some('魏'), Some('位'), Some('渭'), Some('谓'), Some('尉'), Some('慰'), Some('卫'), Some('瘟'), Some('温'), Some('蚊'), Some('文'), Some('闻'), Some('纹'), Some('吻'), Some('稳'), Some('紊'),
    Some('问'), Some('嗡'), Some('翁'), Some('瓮'), Some('挝'), Some('蜗'), Some('涡'), Some('窝'), Some('我'), Some('斡'), Some('卧'), Some('握'), Some('沃'), Some('巫'), Some('呜'), Some('钨'),
    Some('乌'), Some('污'), Some('诬'), Some('屋'), Some('无'), Some('芜'), Some('梧'), Some('吾'), Some('吴'), Some('毋'), Some('武'), Some('五'), Some('捂'), Some('午'), Some('舞'), Some('伍'),
    Some('侮'), Some('坞'), Some('戊'), Some('雾'), Some('晤'), Some('物'), Some('勿'), Some('务'), Some('悟'), Some('误'), Some('昔'), Some('熙'), Some('析'), Some('西'), Some('硒'), Some('矽'),
    Some('晰'), Some('嘻'), Some('吸'), Some('锡'), Some('牺'), Some('稀'), Some('息'), Some('希'), Some('悉'), Some('膝'), Some('夕'), Some('惜'), Some('熄'), Some('烯'), Some('溪'), Some('汐'),
    Some('犀'), Some('檄'), Some('袭'), Some('席'), Some('习'), Some('媳'), Some('喜'), Some('铣'), Some('洗'), Some('系'), Some('隙'), Some('戏'), Some('细'), Some('瞎'), Some('虾'), Some('匣'),
    Some('霞'), Some('辖'), Some('暇'), Some('峡'), Some('侠'), Some('狭'), Some('下'), Some('厦'), Some('夏'), Some('吓'), Some('掀'), Some('锨'), Some('先'), Some('仙'), Some('鲜'), Some('纤'),
    Some('咸'), Some('贤'), Some('衔'), Some('舷'), Some('闲'), Some('涎'), Some('弦'), None, None, None, None, None, None, None, None, None,
    // 0x0Exx
    Some('嫌'), Some('显'), Some('险'), Some('现'), Some('献'), Some('县'), Some('腺'), Some('馅'), Some('羡'), Some('宪'), Some('陷'), Some('限'), Some('线'), Some('相'), Some('厢'), Some('镶'),
    Some('香'), Some('箱'), Some('襄'), Some('湘'), Some('乡'), Some('翔'), Some('祥'), Some('详'), Some('想'), Some('响'), Some('享'), Some('项'), Some('巷'), Some('橡'), Some('像'), Some('向'),
    Some('象'), Some('萧'), Some('硝'), Some('霄'), Some('削'), Some('哮'), Some('嚣'), Some('销'), Some('消'), Some('宵'), Some('淆'), Some('晓'), Some('小'), Some('孝'), Some('校'), Some('肖'),
    Some('啸'), Some('笑'), Some('效'), Some('楔'), Some('些'), Some('歇'), Some('蝎'), Some('鞋'), Some('协'), Some('挟'), Some('携'), Some('邪'), Some('斜'), Some('胁'), Some('谐'), Some('写'),
    Some('械'), Some('卸'), Some('蟹'), Some('懈'), Some('泄'), Some('泻'), Some('谢'), Some('屑'), Some('薪'), Some('芯'), Some('锌'), Some('欣'), Some('辛'), Some('新'), Some('忻'), Some('心'),
    Some('信'), Some('衅'), Some('星'), Some('腥'), Some('猩'), Some('惺'), Some('兴'), Some('刑'), Some('型'), Some('形'), Some('邢'), Some('行'), Some('醒'), Some('幸'), Some('杏'), Some('性'),
    Some('姓'), Some('兄'), Some('凶'), Some('胸'), Some('匈'), Some('汹'), Some('雄'), Some('熊'), Some('休'), Some('修'), Some('羞'), Some('朽'), Some('嗅'), Some('锈'), Some('秀'), Some('袖'),
    Some('绣'), Some('墟'), Some('戌'), Some('需'), Some('虚'), Some('嘘'), Some('须'), Some('徐'), Some('许'), Some('蓄'), Some('酗'), Some('叙'), Some('旭'), Some('序'), Some('畜'), Some('恤'),
    Some('絮'), Some('婿'), Some('绪'), Some('续'), Some('轩'), Some('喧'), Some('宣'), Some('悬'), Some('旋'), Some('玄'), Some('选'), Some('癣'), Some('眩'), Some('绚'), Some('靴'), Some('薛'),
    Some('学'), Some('穴'), Some('雪'), Some('血'), Some('勋'), Some('熏'), Some('循'), Some('旬'), Some('询'), Some('寻'), Some('驯'), Some('巡'), Some('殉'), Some('汛'), Some('训'), Some('讯'),
    Some('逊'), Some('迅'), Some('压'), Some('押'), Some('鸦'), Some('鸭'), Some('呀'), Some('丫'), Some('芽'), Some('牙'), Some('蚜'), Some('崖'), Some('衙'), Some('涯'), Some('雅'), Some('哑'),
    Some('亚'), Some('讶'), Some('焉'), Some('咽'), Some('阉'), Some('烟'), Some('淹'), Some('盐'), Some('严'), Some('研'), Some('蜒'), Some('岩'), Some('延'), Some('言'), Some('颜'), Some('阎'),
    Some('炎'), Some('沿'), Some('奄'), Some('掩'), Some('眼'), Some('衍'), Some('演'), Some('艳'), Some('堰'), Some('燕'), Some('厌'), Some('砚'), Some('雁'), Some('唁'), Some('彦'), Some('焰'),
    Some('宴'), Some('谚'), Some('验'), Some('殃'), Some('央'), Some('鸯'), Some('秧'), Some('杨'), Some('扬'), Some('佯'), Some('疡'), Some('羊'), Some('洋'), Some('阳'), Some('氧'), Some('仰'),
    Some('痒'), Some('养'), Some('样'), Some('漾'), Some('邀'), Some('腰'), Some('妖'), Some('瑶'), Some('摇'), Some('尧'), Some('遥'), Some('窑'), Some('谣'), Some('姚'), Some('咬'), Some('舀'),
    Some('药'), Some('要'), Some('耀'), Some('椰'), Some('噎'), Some('耶'), Some('爷'), None, None, None, None, None, None, None, None, None,
    // 0x0Fxx
    Some('野'), Some('冶'), Some('也'), Some('页'), Some('掖'), Some('业'), Some('叶'), Some('曳'), Some('腋'), Some('夜'), Some('液'), Some('一'), Some('壹'), Some('医'), Some('揖'), Some('铱'),
    Some('依'), Some('伊'), Some('衣'), Some('颐'), Some('夷'), Some('遗'), Some('移'), Some('仪'), Some('胰'), Some('疑'), Some('沂'), Some('宜'), Some('姨'), Some('彝'), Some('椅'), Some('蚁'),
    Some('倚'), Some('已'), Some('乙'), Some('矣'), Some('以'), Some('艺'), Some('抑'), Some('易'), Some('邑'), Some('屹'), Some('亿'), Some('役'), Some('臆'), Some('逸'), Some('肄'), Some('疫'),
    Some('亦'), Some('裔'), Some('意'), Some('毅'), Some('忆'), Some('义'), Some('益'), Some('溢'), Some('诣'), Some('议'), Some('谊'), Some('译'), Some('异'), Some('翼'), Some('翌'), Some('绎'),
    Some('茵'), Some('荫'), Some('因'), Some('殷'), Some('音'), Some('阴'), Some('姻'), Some('吟'), Some('银'), Some('淫'), Some('寅'), Some('饮'), Some('尹'), Some('引'), Some('隐'), Some('印'),
    Some('英'), Some('樱'), Some('婴'), Some('鹰'), Some('应'), Some('缨'), Some('莹'), Some('萤'), Some('营'), Some('荧'), Some('蝇'), Some('迎'), Some('赢'), Some('盈'), Some('影'), Some('颖'),
    Some('硬'), Some('映'), Some('哟'), Some('拥'), Some('佣'), Some('臃'), Some('痈'), Some('庸'), Some('雍'), Some('踊'), Some('蛹'), Some('咏'), Some('泳'), Some('涌'), Some('永'), Some('恿'),
    Some('勇'), Some('用'), Some('幽'), Some('优'), Some('悠'), Some('忧'), Some('尤'), Some('由'), Some('邮'), Some('铀'), Some('犹'), Some('油'), Some('游'), Some('酉'), Some('有'), Some('友'),
    Some('右'), Some('佑'), Some('釉'), Some('诱'), Some('又'), Some('幼'), Some('迂'), Some('淤'), Some('于'), Some('盂'), Some('榆'), Some('虞'), Some('愚'), Some('舆'), Some('余'), Some('俞'),
    Some('逾'), Some('鱼'), Some('愉'), Some('渝'), Some('渔'), Some('隅'), Some('予'), Some('娱'), Some('雨'), Some('与'), Some('屿'), Some('禹'), Some('宇'), Some('语'), Some('羽'), Some('玉'),
    Some('域'), Some('芋'), Some('郁'), Some('吁'), Some('遇'), Some('喻'), Some('峪'), Some('御'), Some('愈'), Some('欲'), Some('狱'), Some('育'), Some('誉'), Some('浴'), Some('寓'), Some('裕'),
    Some('预'), Some('豫'), Some('驭'), Some('鸳'), Some('渊'), Some('冤'), Some('元'), Some('垣'), Some('袁'), Some('原'), Some('援'), Some('辕'), Some('园'), Some('员'), Some('圆'), Some('猿'),
    Some('源'), Some('缘'), Some('远'), Some('苑'), Some('愿'), Some('怨'), Some('院'), Some('曰'), Some('约'), Some('越'), Some('跃'), Some('钥'), Some('岳'), Some('粤'), Some('月'), Some('悦'),
    Some('阅'), Some('耘'), Some('云'), Some('郧'), Some('匀'), Some('陨'), Some('允'), Some('运'), Some('蕴'), Some('酝'), Some('晕'), Some('韵'), Some('孕'), Some('匝'), Some('砸'), Some('杂'),
    Some('栽'), Some('哉'), Some('灾'), Some('宰'), Some('载'), Some('再'), Some('在'), Some('咱'), Some('攒'), Some('暂'), Some('赞'), Some('赃'), Some('脏'), Some('葬'), Some('遭'), Some('糟'),
    Some('凿'), Some('藻'), Some('枣'), Some('早'), Some('澡'), Some('蚤'), Some('躁'), None, None, None, None, None, None, None, None, None,
    // 0x10xx
    Some('噪'), Some('造'), Some('皂'), Some('灶'), Some('燥'), Some('责'), Some('择'), Some('则'), Some('泽'), Some('贼'), Some('怎'), Some('增'), Some('憎'), Some('曾'), Some('赠'), Some('扎'),
    Some('喳'), Some('渣'), Some('札'), Some('轧'), Some('铡'), Some('闸'), Some('眨'), Some('栅'), Some('榨'), Some('咋'), Some('乍'), Some('炸'), Some('诈'), Some('摘'), Some('斋'), Some('宅'),
    Some('窄'), Some('债'), Some('寨'), Some('瞻'), Some('毡'), Some('詹'), Some('粘'), Some('沾'), Some('盏'), Some('斩'), Some('辗'), Some('崭'), Some('展'), Some('蘸'), Some('栈'), Some('占'),
    Some('战'), Some('站'), Some('湛'), Some('绽'), Some('樟'), Some('章'), Some('彰'), Some('漳'), Some('张'), Some('掌'), Some('涨'), Some('杖'), Some('丈'), Some('帐'), Some('账'), Some('仗'),
    Some('胀'), Some('瘴'), Some('障'), Some('招'), Some('昭'), Some('找'), Some('沼'), Some('赵'), Some('照'), Some('罩'), Some('兆'), Some('肇'), Some('召'), Some('遮'), Some('折'), Some('哲'),
    Some('蛰'), Some('辙'), Some('者'), Some('锗'), Some('蔗'), Some('这'), Some('浙'), Some('珍'), Some('斟'), Some('真'), Some('甄'), Some('砧'), Some('臻'), Some('贞'), Some('针'), Some('侦'),
    Some('枕'), Some('疹'), Some('诊'), Some('震'), Some('振'), Some('镇'), Some('阵'), Some('蒸'), Some('挣'), Some('睁'), Some('征'), Some('狰'), Some('争'), Some('怔'), Some('整'), Some('拯'),
    Some('正'), Some('政'), Some('帧'), Some('症'), Some('郑'), Some('证'), Some('芝'), Some('枝'), Some('支'), Some('吱'), Some('蜘'), Some('知'), Some('肢'), Some('脂'), Some('汁'), Some('之'),
    Some('织'), Some('职'), Some('直'), Some('植'), Some('殖'), Some('执'), Some('值'), Some('侄'), Some('址'), Some('指'), Some('止'), Some('趾'), Some('只'), Some('旨'), Some('纸'), Some('志'),
    Some('挚'), Some('掷'), Some('至'), Some('致'), Some('置'), Some('帜'), Some('峙'), Some('制'), Some('智'), Some('秩'), Some('稚'), Some('质'), Some('炙'), Some('痔'), Some('滞'), Some('治'),
    Some('窒'), Some('中'), Some('盅'), Some('忠'), Some('钟'), Some('衷'), Some('终'), Some('种'), Some('肿'), Some('重'), Some('仲'), Some('众'), Some('舟'), Some('周'), Some('州'), Some('洲'),
    Some('诌'), Some('粥'), Some('轴'), Some('肘'), Some('帚'), Some('咒'), Some('皱'), Some('宙'), Some('昼'), Some('骤'), Some('珠'), Some('株'), Some('蛛'), Some('朱'), Some('猪'), Some('诸'),
    Some('诛'), Some('逐'), Some('竹'), Some('烛'), Some('煮'), Some('拄'), Some('瞩'), Some('嘱'), Some('主'), Some('著'), Some('柱'), Some('助'), Some('蛀'), Some('贮'), Some('铸'), Some('筑'),
    Some('住'), Some('注'), Some('祝'), Some('驻'), Some('抓'), Some('爪'), Some('拽'), Some('专'), Some('砖'), Some('转'), Some('撰'), Some('赚'), Some('篆'), Some('桩'), Some('庄'), Some('装'),
    Some('妆'), Some('撞'), Some('壮'), Some('状'), Some('椎'), Some('锥'), Some('追'), Some('赘'), Some('坠'), Some('缀'), Some('谆'), Some('准'), Some('捉'), Some('拙'), Some('卓'), Some('桌'),
    Some('琢'), Some('茁'), Some('酌'), Some('啄'), Some('着'), Some('灼'), Some('浊'), None, None, None, None, None, None, None, None, None,
    // 0x11xx
    Some('兹'), Some('咨'), Some('资'), Some('姿'), Some('滋'), Some('淄'), Some('孜'), Some('紫'), Some('仔'), Some('籽'), Some('滓'), Some('子'), Some('自'), Some('渍'), Some('字'), Some('鬃'),
    Some('棕'), Some('踪'), Some('宗'), Some('综'), Some('总'), Some('纵'), Some('邹'), Some('走'), Some('奏'), Some('揍'), Some('租'), Some('足'), Some('卒'), Some('族'), Some('祖'), Some('诅'),
    Some('阻'), Some('组'), Some('钻'), Some('纂'), Some('嘴'), Some('醉'), Some('最'), Some('罪'), Some('尊'), Some('遵'), Some('昨'), Some('左'), Some('佐'), Some('柞'), Some('做'), Some('作'),
    Some('坐'), Some('座'), Some('亍'), Some('丌'), Some('兀'), Some('丐'), Some('廿'), Some('卅'), Some('丕'), Some('亘'), Some('丞'), Some('鬲'), Some('孬'), Some('噩'), Some('丨'), Some('禺'),
    Some('丿'), Some('匕'), Some('乇'), Some('夭'), Some('爻'), Some('卮'), Some('氐'), Some('囟'), Some('胤'), Some('馗'), Some('毓'), Some('睾'), Some('鼗'), Some('丶'), Some('亟'), Some('鼐'),
    Some('乜'), Some('乩'), Some('亓'), Some('芈'), Some('孛'), Some('啬'), Some('嘏'), Some('仄'), Some('厍'), Some('厝'), Some('厣'), Some('厥'), Some('厮'), Some('靥'), Some('赝'), Some('匚'),
    Some('叵'), Some('匦'), Some('匮'), Some('匾'), Some('赜'), Some('卦'), Some('卣'), Some('刂'), Some('刈'), Some('刎'), Some('刭'), Some('刳'), Some('刿'), Some('剀'), Some('剌'), Some('剞'),
    Some('剡'), Some('剜'), Some('蒯'), Some('剽'), Some('劂'), Some('劁'), Some('劐'), Some('劓'), Some('冂'), Some('罔'), Some('亻'), Some('仃'), Some('仉'), Some('仂'), Some('仨'), Some('仡'),
    Some('仫'), Some('仞'), Some('伛'), Some('仳'), Some('伢'), Some('佤'), Some('仵'), Some('伥'), Some('伧'), Some('伉'), Some('伫'), Some('佞'), Some('佧'), Some('攸'), Some('佚'), Some('佝'),
    Some('佟'), Some('佗'), Some('伲'), Some('伽'), Some('佶'), Some('佴'), Some('侑'), Some('侉'), Some('侃'), Some('侏'), Some('佾'), Some('佻'), Some('侪'), Some('佼'), Some('侬'), Some('侔'),
    Some('俦'), Some('俨'), Some('俪'), Some('俅'), Some('俚'), Some('俣'), Some('俜'), Some('俑'), Some('俟'), Some('俸'), Some('倩'), Some('偌'), Some('俳'), Some('倬'), Some('倏'), Some('倮'),
    Some('倭'), Some('俾'), Some('倜'), Some('倌'), Some('倥'), Some('倨'), Some('偾'), Some('偃'), Some('偕'), Some('偈'), Some('偎'), Some('偬'), Some('偻'), Some('傥'), Some('傧'), Some('傩'),
    Some('傺'), Some('僖'), Some('儆'), Some('僭'), Some('僬'), Some('僦'), Some('僮'), Some('儇'), Some('儋'), Some('仝'), Some('氽'), Some('佘'), Some('佥'), Some('俎'), Some('龠'), Some('汆'),
    Some('籴'), Some('兮'), Some('巽'), Some('黉'), Some('馘'), Some('冁'), Some('夔'), Some('勹'), Some('匍'), Some('訇'), Some('匐'), Some('凫'), Some('夙'), Some('兕'), Some('亠'), Some('兖'),
    Some('亳'), Some('衮'), Some('袤'), Some('亵'), Some('脔'), Some('裒'), Some('禀'), Some('嬴'), Some('蠃'), Some('羸'), Some('冫'), Some('冱'), Some('冽'), Some('冼'), Some('凇'), Some('冖'),
    Some('冢'), Some('冥'), Some('讠'), Some('讦'), Some('讧'), Some('讪'), Some('讴'), None, None, None, None, None, None, None, None, None,
    // 0x12xx
    Some('讵'), Some('讷'), Some('诂'), Some('诃'), Some('诋'), Some('诏'), Some('诎'), Some('诒'), Some('诓'), Some('诔'), Some('诖'), Some('诘'), Some('诙'), Some('诜'), Some('诟'), Some('诠'),
    Some('诤'), Some('诨'), Some('诩'), Some('诮'), Some('诰'), Some('诳'), Some('诶'), Some('诹'), Some('诼'), Some('诿'), Some('谀'), Some('谂'), Some('谄'), Some('谇'), Some('谌'), Some('谏'),
    Some('谑'), Some('谒'), Some('谔'), Some('谕'), Some('谖'), Some('谙'), Some('谛'), Some('谘'), Some('谝'), Some('谟'), Some('谠'), Some('谡'), Some('谥'), Some('谧'), Some('谪'), Some('谫'),
    Some('谮'), Some('谯'), Some('谲'), Some('谳'), Some('谵'), Some('谶'), Some('卩'), Some('卺'), Some('阝'), Some('阢'), Some('阡'), Some('阱'), Some('阪'), Some('阽'), Some('阼'), Some('陂'),
    Some('陉'), Some('陔'), Some('陟'), Some('陧'), Some('陬'), Some('陲'), Some('陴'), Some('隈'), Some('隍'), Some('隗'), Some('隰'), Some('邗'), Some('邛'), Some('邝'), Some('邙'), Some('邬'),
    Some('邡'), Some('邴'), Some('邳'), Some('邶'), Some('邺'), Some('邸'), Some('邰'), Some('郏'), Some('郅'), Some('邾'), Some('郐'), Some('郄'), Some('郇'), Some('郓'), Some('郦'), Some('郢'),
    Some('郜'), Some('郗'), Some('郛'), Some('郫'), Some('郯'), Some('郾'), Some('鄄'), Some('鄢'), Some('鄞'), Some('鄣'), Some('鄱'), Some('鄯'), Some('鄹'), Some('酃'), Some('酆'), Some('刍'),
    Some('奂'), Some('劢'), Some('劬'), Some('劭'), Some('劾'), Some('哿'), Some('勐'), Some('勖'), Some('勰'), Some('叟'), Some('燮'), Some('矍'), Some('廴'), Some('凵'), Some('凼'), Some('鬯'),
    Some('厶'), Some('弁'), Some('畚'), Some('巯'), Some('坌'), Some('垩'), Some('垡'), Some('塾'), Some('墼'), Some('壅'), Some('壑'), Some('圩'), Some('圬'), Some('圪'), Some('圳'), Some('圹'),
    Some('圮'), Some('圯'), Some('坜'), Some('圻'), Some('坂'), Some('坩'), Some('垅'), Some('坫'), Some('垆'), Some('坼'), Some('坻'), Some('坨'), Some('坭'), Some('坶'), Some('坳'), Some('垭'),
    Some('垤'), Some('垌'), Some('垲'), Some('埏'), Some('垧'), Some('垴'), Some('垓'), Some('垠'), Some('埕'), Some('埘'), Some('埚'), Some('埙'), Some('埒'), Some('垸'), Some('埴'), Some('埯'),
    Some('埸'), Some('埤'), Some('埝'), Some('堋'), Some('堍'), Some('埽'), Some('埭'), Some('堀'), Some('堞'), Some('堙'), Some('塄'), Some('堠'), Some('塥'), Some('塬'), Some('墁'), Some('墉'),
    Some('墚'), Some('墀'), Some('馨'), Some('鼙'), Some('懿'), Some('艹'), Some('艽'), Some('艿'), Some('芏'), Some('芊'), Some('芨'), Some('芄'), Some('芎'), Some('芑'), Some('芗'), Some('芙'),
    Some('芫'), Some('芸'), Some('芾'), Some('芰'), Some('苈'), Some('苊'), Some('苣'), Some('芘'), Some('芷'), Some('芮'), Some('苋'), Some('苌'), Some('苁'), Some('芩'), Some('芴'), Some('芡'),
    Some('芪'), Some('芟'), Some('苄'), Some('苎'), Some('芤'), Some('苡'), Some('茉'), Some('苷'), Some('苤'), Some('茏'), Some('茇'), Some('苜'), Some('苴'), Some('苒'), Some('苘'), Some('茌'),
    Some('苻'), Some('苓'), Some('茑'), Some('茚'), Some('茆'), Some('茔'), Some('茕'), None, None, None, None, None, None, None, None, None,
    // 0x13xx
    Some('苠'), Some('苕'), Some('茜'), Some('荑'), Some('荛'), Some('荜'), Some('茈'), Some('莒'), Some('茼'), Some('茴'), Some('茱'), Some('莛'), Some('荞'), Some('茯'), Some('荏'), Some('荇'),
    Some('荃'), Some('荟'), Some('荀'), Some('茗'), Some('荠'), Some('茭'), Some('茺'), Some('茳'), Some('荦'), Some('荥'), Some('荨'), Some('茛'), Some('荩'), Some('荬'), Some('荪'), Some('荭'),
    Some('荮'), Some('莰'), Some('荸'), Some('莳'), Some('莴'), Some('莠'), Some('莪'), Some('莓'), Some('莜'), Some('莅'), Some('荼'), Some('莶'), Some('莩'), Some('荽'), Some('莸'), Some('荻'),
    Some('莘'), Some('莞'), Some('莨'), Some('莺'), Some('莼'), Some('菁'), Some('萁'), Some('菥'), Some('菘'), Some('堇'), Some('萘'), Some('萋'), Some('菝'), Some('菽'), Some('菖'), Some('萜'),
    Some('萸'), Some('萑'), Some('萆'), Some('菔'), Some('菟'), Some('萏'), Some('萃'), Some('菸'), Some('菹'), Some('菪'), Some('菅'), Some('菀'), Some('萦'), Some('菰'), Some('菡'), Some('葜'),
    Some('葑'), Some('葚'), Some('葙'), Some('葳'), Some('蒇'), Some('蒈'), Some('葺'), Some('蒉'), Some('葸'), Some('萼'), Some('葆'), Some('葩'), Some('葶'), Some('蒌'), Some('蒎'), Some('萱'),
    Some('葭'), Some('蓁'), Some('蓍'), Some('蓐'), Some('蓦'), Some('蒽'), Some('蓓'), Some('蓊'), Some('蒿'), Some('蒺'), Some('蓠'), Some('蒡'), Some('蒹'), Some('蒴'), Some('蒗'), Some('蓥'),
    Some('蓣'), Some('蔌'), Some('甍'), Some('蔸'), Some('蓰'), Some('蔹'), Some('蔟'), Some('蔺'), Some('蕖'), Some('蔻'), Some('蓿'), Some('蓼'), Some('蕙'), Some('蕈'), Some('蕨'), Some('蕤'),
    Some('蕞'), Some('蕺'), Some('瞢'), Some('蕃'), Some('蕲'), Some('蕻'), Some('薤'), Some('薨'), Some('薇'), Some('薏'), Some('蕹'), Some('薮'), Some('薜'), Some('薅'), Some('薹'), Some('薷'),
    Some('薰'), Some('藓'), Some('藁'), Some('藜'), Some('藿'), Some('蘧'), Some('蘅'), Some('蘩'), Some('蘖'), Some('蘼'), Some('廾'), Some('弈'), Some('夼'), Some('奁'), Some('耷'), Some('奕'),
    Some('奚'), Some('奘'), Some('匏'), Some('尢'), Some('尥'), Some('尬'), Some('尴'), Some('扌'), Some('扪'), Some('抟'), Some('抻'), Some('拊'), Some('拚'), Some('拗'), Some('拮'), Some('挢'),
    Some('拶'), Some('挹'), Some('捋'), Some('捃'), Some('掭'), Some('揶'), Some('捱'), Some('捺'), Some('掎'), Some('掴'), Some('捭'), Some('掬'), Some('掊'), Some('捩'), Some('掮'), Some('掼'),
    Some('揲'), Some('揸'), Some('揠'), Some('揿'), Some('揄'), Some('揞'), Some('揎'), Some('摒'), Some('揆'), Some('掾'), Some('摅'), Some('摁'), Some('搋'), Some('搛'), Some('搠'), Some('搌'),
    Some('搦'), Some('搡'), Some('摞'), Some('撄'), Some('摭'), Some('撖'), Some('摺'), Some('撷'), Some('撸'), Some('撙'), Some('撺'), Some('擀'), Some('擐'), Some('擗'), Some('擤'), Some('擢'),
    Some('攉'), Some('攥'), Some('攮'), Some('弋'), Some('忒'), Some('甙'), Some('弑'), Some('卟'), Some('叱'), Some('叽'), Some('叩'), Some('叨'), Some('叻'), Some('吒'), Some('吖'), Some('吆'),
    Some('呋'), Some('呒'), Some('呓'), Some('呔'), Some('呖'), Some('呃'), Some('吡'), None, None, None, None, None, None, None, None, None,
    // 0x14xx
    Some('呗'), Some('呙'), Some('吣'), Some('吲'), Some('咂'), Some('咔'), Some('呷'), Some('呱'), Some('呤'), Some('咚'), Some('咛'), Some('咄'), Some('呶'), Some('呦'), Some('咝'), Some('哐'),
    Some('咭'), Some('哂'), Some('咴'), Some('哒'), Some('咧'), Some('咦'), Some('哓'), Some('哔'), Some('呲'), Some('咣'), Some('哕'), Some('咻'), Some('咿'), Some('哌'), Some('哙'), Some('哚'),
    Some('哜'), Some('咩'), Some('咪'), Some('咤'), Some('哝'), Some('哏'), Some('哞'), Some('唛'), Some('哧'), Some('唠'), Some('哽'), Some('唔'), Some('哳'), Some('唢'), Some('唣'), Some('唏'),
    Some('唑'), Some('唧'), Some('唪'), Some('啧'), Some('喏'), Some('喵'), Some('啉'), Some('啭'), Some('啁'), Some('啕'), Some('唿'), Some('啐'), Some('唼'), Some('唷'), Some('啖'), Some('啵'),
    Some('啶'), Some('啷'), Some('唳'), Some('唰'), Some('啜'), Some('喋'), Some('嗒'), Some('喃'), Some('喱'), Some('喹'), Some('喈'), Some('喁'), Some('喟'), Some('啾'), Some('嗖'), Some('喑'),
    Some('啻'), Some('嗟'), Some('喽'), Some('喾'), Some('喔'), Some('喙'), Some('嗪'), Some('嗷'), Some('嗉'), Some('嘟'), Some('嗑'), Some('嗫'), Some('嗬'), Some('嗔'), Some('嗦'), Some('嗝'),
    Some('嗄'), Some('嗯'), Some('嗥'), Some('嗲'), Some('嗳'), Some('嗌'), Some('嗍'), Some('嗨'), Some('嗵'), Some('嗤'), Some('辔'), Some('嘞'), Some('嘈'), Some('嘌'), Some('嘁'), Some('嘤'),
    Some('嘣'), Some('嗾'), Some('嘀'), Some('嘧'), Some('嘭'), Some('噘'), Some('嘹'), Some('噗'), Some('嘬'), Some('噍'), Some('噢'), Some('噙'), Some('噜'), Some('噌'), Some('噔'), Some('嚆'),
    Some('噤'), Some('噱'), Some('噫'), Some('噻'), Some('噼'), Some('嚅'), Some('嚓'), Some('嚯'), Some('囔'), Some('囗'), Some('囝'), Some('囡'), Some('囵'), Some('囫'), Some('囹'), Some('囿'),
    Some('圄'), Some('圊'), Some('圉'), Some('圜'), Some('帏'), Some('帙'), Some('帔'), Some('帑'), Some('帱'), Some('帻'), Some('帼'), Some('帷'), Some('幄'), Some('幔'), Some('幛'), Some('幞'),
    Some('幡'), Some('岌'), Some('屺'), Some('岍'), Some('岐'), Some('岖'), Some('岈'), Some('岘'), Some('岙'), Some('岑'), Some('岚'), Some('岜'), Some('岵'), Some('岢'), Some('岽'), Some('岬'),
    Some('岫'), Some('岱'), Some('岣'), Some('峁'), Some('岷'), Some('峄'), Some('峒'), Some('峤'), Some('峋'), Some('峥'), Some('崂'), Some('崃'), Some('崧'), Some('崦'), Some('崮'), Some('崤'),
    Some('崞'), Some('崆'), Some('崛'), Some('嵘'), Some('崾'), Some('崴'), Some('崽'), Some('嵬'), Some('嵛'), Some('嵯'), Some('嵝'), Some('嵫'), Some('嵋'), Some('嵊'), Some('嵩'), Some('嵴'),
    Some('嶂'), Some('嶙'), Some('嶝'), Some('豳'), Some('嶷'), Some('巅'), Some('彳'), Some('彷'), Some('徂'), Some('徇'), Some('徉'), Some('後'), Some('徕'), Some('徙'), Some('徜'), Some('徨'),
    Some('徭'), Some('徵'), Some('徼'), Some('衢'), Some('彡'), Some('犭'), Some('犰'), Some('犴'), Some('犷'), Some('犸'), Some('狃'), Some('狁'), Some('狎'), Some('狍'), Some('狒'), Some('狨'),
    Some('狯'), Some('狩'), Some('狲'), Some('狴'), Some('狷'), Some('猁'), Some('狳'), None, None, None, None, None, None, None, None, None,
    // 0x15xx
    Some('猃'), Some('狺'), Some('狻'), Some('猗'), Some('猓'), Some('猡'), Some('猊'), Some('猞'), Some('猝'), Some('猕'), Some('猢'), Some('猹'), Some('猥'), Some('猬'), Some('猸'), Some('猱'),
    Some('獐'), Some('獍'), Some('獗'), Some('獠'), Some('獬'), Some('獯'), Some('獾'), Some('舛'), Some('夥'), Some('飧'), Some('夤'), Some('夂'), Some('饣'), Some('饧'), Some('饨'), Some('饩'),
    Some('饪'), Some('饫'), Some('饬'), Some('饴'), Some('饷'), Some('饽'), Some('馀'), Some('馄'), Some('馇'), Some('馊'), Some('馍'), Some('馐'), Some('馑'), Some('馓'), Some('馔'), Some('馕'),
    Some('庀'), Some('庑'), Some('庋'), Some('庖'), Some('庥'), Some('庠'), Some('庹'), Some('庵'), Some('庾'), Some('庳'), Some('赓'), Some('廒'), Some('廑'), Some('廛'), Some('廨'), Some('廪'),
    Some('膺'), Some('忄'), Some('忉'), Some('忖'), Some('忏'), Some('怃'), Some('忮'), Some('怄'), Some('忡'), Some('忤'), Some('忾'), Some('怅'), Some('怆'), Some('忪'), Some('忭'), Some('忸'),
    Some('怙'), Some('怵'), Some('怦'), Some('怛'), Some('怏'), Some('怍'), Some('怩'), Some('怫'), Some('怊'), Some('怿'), Some('怡'), Some('恸'), Some('恹'), Some('恻'), Some('恺'), Some('恂'),
    Some('恪'), Some('恽'), Some('悖'), Some('悚'), Some('悭'), Some('悝'), Some('悃'), Some('悒'), Some('悌'), Some('悛'), Some('惬'), Some('悻'), Some('悱'), Some('惝'), Some('惘'), Some('惆'),
    Some('惚'), Some('悴'), Some('愠'), Some('愦'), Some('愕'), Some('愣'), Some('惴'), Some('愀'), Some('愎'), Some('愫'), Some('慊'), Some('慵'), Some('憬'), Some('憔'), Some('憧'), Some('憷'),
    Some('懔'), Some('懵'), Some('忝'), Some('隳'), Some('闩'), Some('闫'), Some('闱'), Some('闳'), Some('闵'), Some('闶'), Some('闼'), Some('闾'), Some('阃'), Some('阄'), Some('阆'), Some('阈'),
    Some('阊'), Some('阋'), Some('阌'), Some('阍'), Some('阏'), Some('阒'), Some('阕'), Some('阖'), Some('阗'), Some('阙'), Some('阚'), Some('丬'), Some('爿'), Some('戕'), Some('氵'), Some('汔'),
    Some('汜'), Some('汊'), Some('沣'), Some('沅'), Some('沐'), Some('沔'), Some('沌'), Some('汨'), Some('汩'), Some('汴'), Some('汶'), Some('沆'), Some('沩'), Some('泐'), Some('泔'), Some('沭'),
    Some('泷'), Some('泸'), Some('泱'), Some('泗'), Some('沲'), Some('泠'), Some('泖'), Some('泺'), Some('泫'), Some('泮'), Some('沱'), Some('泓'), Some('泯'), Some('泾'), Some('洹'), Some('洧'),
    Some('洌'), Some('浃'), Some('浈'), Some('洇'), Some('洄'), Some('洙'), Some('洎'), Some('洫'), Some('浍'), Some('洮'), Some('洵'), Some('洚'), Some('浏'), Some('浒'), Some('浔'), Some('洳'),
    Some('涑'), Some('浯'), Some('涞'), Some('涠'), Some('浞'), Some('涓'), Some('涔'), Some('浜'), Some('浠'), Some('浼'), Some('浣'), Some('渚'), Some('淇'), Some('淅'), Some('淞'), Some('渎'),
    Some('涿'), Some('淠'), Some('渑'), Some('淦'), Some('淝'), Some('淙'), Some('渖'), Some('涫'), Some('渌'), Some('涮'), Some('渫'), Some('湮'), Some('湎'), Some('湫'), Some('溲'), Some('湟'),
    Some('溆'), Some('湓'), Some('湔'), Some('渲'), Some('渥'), Some('湄'), Some('滟'), None, None, None, None, None, None, None, None, None,
    // 0x16xx
    Some('溱'), Some('溘'), Some('滠'), Some('漭'), Some('滢'), Some('溥'), Some('溧'), Some('溽'), Some('溻'), Some('溷'), Some('滗'), Some('溴'), Some('滏'), Some('溏'), Some('滂'), Some('溟'),
    Some('潢'), Some('潆'), Some('潇'), Some('漤'), Some('漕'), Some('滹'), Some('漯'), Some('漶'), Some('潋'), Some('潴'), Some('漪'), Some('漉'), Some('漩'), Some('澉'), Some('澍'), Some('澌'),
    Some('潸'), Some('潲'), Some('潼'), Some('潺'), Some('濑'), Some('濉'), Some('澧'), Some('澹'), Some('澶'), Some('濂'), Some('濡'), Some('濮'), Some('濞'), Some('濠'), Some('濯'), Some('瀚'),
    Some('瀣'), Some('瀛'), Some('瀹'), Some('瀵'), Some('灏'), Some('灞'), Some('宀'), Some('宄'), Some('宕'), Some('宓'), Some('宥'), Some('宸'), Some('甯'), Some('骞'), Some('搴'), Some('寤'),
    Some('寮'), Some('褰'), Some('寰'), Some('蹇'), Some('謇'), Some('辶'), Some('迓'), Some('迕'), Some('迥'), Some('迮'), Some('迤'), Some('迩'), Some('迦'), Some('迳'), Some('迨'), Some('逅'),
    Some('逄'), Some('逋'), Some('逦'), Some('逑'), Some('逍'), Some('逖'), Some('逡'), Some('逵'), Some('逶'), Some('逭'), Some('逯'), Some('遄'), Some('遑'), Some('遒'), Some('遐'), Some('遨'),
    Some('遘'), Some('遢'), Some('遛'), Some('暹'), Some('遴'), Some('遽'), Some('邂'), Some('邈'), Some('邃'), Some('邋'), Some('彐'), Some('彗'), Some('彖'), Some('彘'), Some('尻'), Some('咫'),
    Some('屐'), Some('屙'), Some('孱'), Some('屣'), Some('屦'), Some('羼'), Some('弪'), Some('弩'), Some('弭'), Some('艴'), Some('弼'), Some('鬻'), Some('屮'), Some('妁'), Some('妃'), Some('妍'),
    Some('妩'), Some('妪'), Some('妣'), Some('妗'), Some('姊'), Some('妫'), Some('妞'), Some('妤'), Some('姒'), Some('妲'), Some('妯'), Some('姗'), Some('妾'), Some('娅'), Some('娆'), Some('姝'),
    Some('娈'), Some('姣'), Some('姘'), Some('姹'), Some('娌'), Some('娉'), Some('娲'), Some('娴'), Some('娑'), Some('娣'), Some('娓'), Some('婀'), Some('婧'), Some('婊'), Some('婕'), Some('娼'),
    Some('婢'), Some('婵'), Some('胬'), Some('媪'), Some('媛'), Some('婷'), Some('婺'), Some('媾'), Some('嫫'), Some('媲'), Some('嫒'), Some('嫔'), Some('媸'), Some('嫠'), Some('嫣'), Some('嫱'),
    Some('嫖'), Some('嫦'), Some('嫘'), Some('嫜'), Some('嬉'), Some('嬗'), Some('嬖'), Some('嬲'), Some('嬷'), Some('孀'), Some('尕'), Some('尜'), Some('孚'), Some('孥'), Some('孳'), Some('孑'),
    Some('孓'), Some('孢'), Some('驵'), Some('驷'), Some('驸'), Some('驺'), Some('驿'), Some('驽'), Some('骀'), Some('骁'), Some('骅'), Some('骈'), Some('骊'), Some('骐'), Some('骒'), Some('骓'),
    Some('骖'), Some('骘'), Some('骛'), Some('骜'), Some('骝'), Some('骟'), Some('骠'), Some('骢'), Some('骣'), Some('骥'), Some('骧'), Some('纟'), Some('纡'), Some('纣'), Some('纥'), Some('纨'),
    Some('纩'), Some('纭'), Some('纰'), Some('纾'), Some('绀'), Some('绁'), Some('绂'), Some('绉'), Some('绋'), Some('绌'), Some('绐'), Some('绔'), Some('绗'), Some('绛'), Some('绠'), Some('绡'),
    Some('绨'), Some('绫'), Some('绮'), Some('绯'), Some('绱'), Some('绲'), Some('缍'), None, None, None, None, None, None, None, None, None,
    // 0x17xx
    Some('绶'), Some('绺'), Some('绻'), Some('绾'), Some('缁'), Some('缂'), Some('缃'), Some('缇'), Some('缈'), Some('缋'), Some('缌'), Some('缏'), Some('缑'), Some('缒'), Some('缗'), Some('缙'),
    Some('缜'), Some('缛'), Some('缟'), Some('缡'), Some('缢'), Some('缣'), Some('缤'), Some('缥'), Some('缦'), Some('缧'), Some('缪'), Some('缫'), Some('缬'), Some('缭'), Some('缯'), Some('缰'),
    Some('缱'), Some('缲'), Some('缳'), Some('缵'), Some('幺'), Some('畿'), Some('巛'), Some('甾'), Some('邕'), Some('玎'), Some('玑'), Some('玮'), Some('玢'), Some('玟'), Some('珏'), Some('珂'),
    Some('珑'), Some('玷'), Some('玳'), Some('珀'), Some('珉'), Some('珈'), Some('珥'), Some('珙'), Some('顼'), Some('琊'), Some('珩'), Some('珧'), Some('珞'), Some('玺'), Some('珲'), Some('琏'),
    Some('琪'), Some('瑛'), Some('琦'), Some('琥'), Some('琨'), Some('琰'), Some('琮'), Some('琬'), Some('琛'), Some('琚'), Some('瑁'), Some('瑜'), Some('瑗'), Some('瑕'), Some('瑙'), Some('瑷'),
    Some('瑭'), Some('瑾'), Some('璜'), Some('璎'), Some('璀'), Some('璁'), Some('璇'), Some('璋'), Some('璞'), Some('璨'), Some('璩'), Some('璐'), Some('璧'), Some('瓒'), Some('璺'), Some('韪'),
    Some('韫'), Some('韬'), Some('杌'), Some('杓'), Some('杞'), Some('杈'), Some('杩'), Some('枥'), Some('枇'), Some('杪'), Some('杳'), Some('枘'), Some('枧'), Some('杵'), Some('枨'), Some('枞'),
    Some('枭'), Some('枋'), Some('杷'), Some('杼'), Some('柰'), Some('栉'), Some('柘'), Some('栊'), Some('柩'), Some('枰'), Some('栌'), Some('柙'), Some('枵'), Some('柚'), Some('枳'), Some('柝'),
    Some('栀'), Some('柃'), Some('枸'), Some('柢'), Some('栎'), Some('柁'), Some('柽'), Some('栲'), Some('栳'), Some('桠'), Some('桡'), Some('桎'), Some('桢'), Some('桄'), Some('桤'), Some('梃'),
    Some('栝'), Some('桕'), Some('桦'), Some('桁'), Some('桧'), Some('桀'), Some('栾'), Some('桊'), Some('桉'), Some('栩'), Some('梵'), Some('梏'), Some('桴'), Some('桷'), Some('梓'), Some('桫'),
    Some('棂'), Some('楮'), Some('棼'), Some('椟'), Some('椠'), Some('棹'), Some('椤'), Some('棰'), Some('椋'), Some('椁'), Some('楗'), Some('棣'), Some('椐'), Some('楱'), Some('椹'), Some('楠'),
    Some('楂'), Some('楝'), Some('榄'), Some('楫'), Some('榀'), Some('榘'), Some('楸'), Some('椴'), Some('槌'), Some('榇'), Some('榈'), Some('槎'), Some('榉'), Some('楦'), Some('楣'), Some('楹'),
    Some('榛'), Some('榧'), Some('榻'), Some('榫'), Some('榭'), Some('槔'), Some('榱'), Some('槁'), Some('槊'), Some('槟'), Some('榕'), Some('槠'), Some('榍'), Some('槿'), Some('樯'), Some('槭'),
    Some('樗'), Some('樘'), Some('橥'), Some('槲'), Some('橄'), Some('樾'), Some('檠'), Some('橐'), Some('橛'), Some('樵'), Some('檎'), Some('橹'), Some('樽'), Some('樨'), Some('橘'), Some('橼'),
    Some('檑'), Some('檐'), Some('檩'), Some('檗'), Some('檫'), Some('猷'), Some('獒'), Some('殁'), Some('殂'), Some('殇'), Some('殄'), Some('殒'), Some('殓'), Some('殍'), Some('殚'), Some('殛'),
    Some('殡'), Some('殪'), Some('轫'), Some('轭'), Some('轱'), Some('轲'), Some('轳'), None, None, None, None, None, None, None, None, None,
    // 0x18xx
    Some('轵'), Some('轶'), Some('轸'), Some('轷'), Some('轹'), Some('轺'), Some('轼'), Some('轾'), Some('辁'), Some('辂'), Some('辄'), Some('辇'), Some('辋'), Some('辍'), Some('辎'), Some('辏'),
    Some('辘'), Some('辚'), Some('軎'), Some('戋'), Some('戗'), Some('戛'), Some('戟'), Some('戢'), Some('戡'), Some('戥'), Some('戤'), Some('戬'), Some('臧'), Some('瓯'), Some('瓴'), Some('瓿'),
    Some('甏'), Some('甑'), Some('甓'), Some('攴'), Some('旮'), Some('旯'), Some('旰'), Some('昊'), Some('昙'), Some('杲'), Some('昃'), Some('昕'), Some('昀'), Some('炅'), Some('曷'), Some('昝'),
    Some('昴'), Some('昱'), Some('昶'), Some('昵'), Some('耆'), Some('晟'), Some('晔'), Some('晁'), Some('晏'), Some('晖'), Some('晡'), Some('晗'), Some('晷'), Some('暄'), Some('暌'), Some('暧'),
    Some('暝'), Some('暾'), Some('曛'), Some('曜'), Some('曦'), Some('曩'), Some('贲'), Some('贳'), Some('贶'), Some('贻'), Some('贽'), Some('赀'), Some('赅'), Some('赆'), Some('赈'), Some('赉'),
    Some('赇'), Some('赍'), Some('赕'), Some('赙'), Some('觇'), Some('觊'), Some('觋'), Some('觌'), Some('觎'), Some('觏'), Some('觐'), Some('觑'), Some('牮'), Some('犟'), Some('牝'), Some('牦'),
    Some('牯'), Some('牾'), Some('牿'), Some('犄'), Some('犋'), Some('犍'), Some('犏'), Some('犒'), Some('挈'), Some('挲'), Some('掰'), Some('搿'), Some('擘'), Some('耄'), Some('毪'), Some('毳'),
    Some('毽'), Some('毵'), Some('毹'), Some('氅'), Some('氇'), Some('氆'), Some('氍'), Some('氕'), Some('氘'), Some('氙'), Some('氚'), Some('氡'), Some('氩'), Some('氤'), Some('氪'), Some('氲'),
    Some('攵'), Some('敕'), Some('敫'), Some('牍'), Some('牒'), Some('牖'), Some('爰'), Some('虢'), Some('刖'), Some('肟'), Some('肜'), Some('肓'), Some('肼'), Some('朊'), Some('肽'), Some('肱'),
    Some('肫'), Some('肭'), Some('肴'), Some('肷'), Some('胧'), Some('胨'), Some('胩'), Some('胪'), Some('胛'), Some('胂'), Some('胄'), Some('胙'), Some('胍'), Some('胗'), Some('朐'), Some('胝'),
    Some('胫'), Some('胱'), Some('胴'), Some('胭'), Some('脍'), Some('脎'), Some('胲'), Some('胼'), Some('朕'), Some('脒'), Some('豚'), Some('脶'), Some('脞'), Some('脬'), Some('脘'), Some('脲'),
    Some('腈'), Some('腌'), Some('腓'), Some('腴'), Some('腙'), Some('腚'), Some('腱'), Some('腠'), Some('腩'), Some('腼'), Some('腽'), Some('腭'), Some('腧'), Some('塍'), Some('媵'), Some('膈'),
    Some('膂'), Some('膑'), Some('滕'), Some('膣'), Some('膪'), Some('臌'), Some('朦'), Some('臊'), Some('膻'), Some('臁'), Some('膦'), Some('欤'), Some('欷'), Some('欹'), Some('歃'), Some('歆'),
    Some('歙'), Some('飑'), Some('飒'), Some('飓'), Some('飕'), Some('飙'), Some('飚'), Some('殳'), Some('彀'), Some('毂'), Some('觳'), Some('斐'), Some('齑'), Some('斓'), Some('於'), Some('旆'),
    Some('旄'), Some('旃'), Some('旌'), Some('旎'), Some('旒'), Some('旖'), Some('炀'), Some('炜'), Some('炖'), Some('炝'), Some('炻'), Some('烀'), Some('炷'), Some('炫'), Some('炱'), Some('烨'),
    Some('烊'), Some('焐'), Some('焓'), Some('焖'), Some('焯'), Some('焱'), Some('煳'), None, None, None, None, None, None, None, None, None,
    // 0x19xx
    Some('煜'), Some('煨'), Some('煅'), Some('煲'), Some('煊'), Some('煸'), Some('煺'), Some('熘'), Some('熳'), Some('熵'), Some('熨'), Some('熠'), Some('燠'), Some('燔'), Some('燧'), Some('燹'),
    Some('爝'), Some('爨'), Some('灬'), Some('焘'), Some('煦'), Some('熹'), Some('戾'), Some('戽'), Some('扃'), Some('扈'), Some('扉'), Some('礻'), Some('祀'), Some('祆'), Some('祉'), Some('祛'),
    Some('祜'), Some('祓'), Some('祚'), Some('祢'), Some('祗'), Some('祠'), Some('祯'), Some('祧'), Some('祺'), Some('禅'), Some('禊'), Some('禚'), Some('禧'), Some('禳'), Some('忑'), Some('忐'),
    Some('怼'), Some('恝'), Some('恚'), Some('恧'), Some('恁'), Some('恙'), Some('恣'), Some('悫'), Some('愆'), Some('愍'), Some('慝'), Some('憩'), Some('憝'), Some('懋'), Some('懑'), Some('戆'),
    Some('肀'), Some('聿'), Some('沓'), Some('泶'), Some('淼'), Some('矶'), Some('矸'), Some('砀'), Some('砉'), Some('砗'), Some('砘'), Some('砑'), Some('斫'), Some('砭'), Some('砜'), Some('砝'),
    Some('砹'), Some('砺'), Some('砻'), Some('砟'), Some('砼'), Some('砥'), Some('砬'), Some('砣'), Some('砩'), Some('硎'), Some('硭'), Some('硖'), Some('硗'), Some('砦'), Some('硐'), Some('硇'),
    Some('硌'), Some('硪'), Some('碛'), Some('碓'), Some('碚'), Some('碇'), Some('碜'), Some('碡'), Some('碣'), Some('碲'), Some('碹'), Some('碥'), Some('磔'), Some('磙'), Some('磉'), Some('磬'),
    Some('磲'), Some('礅'), Some('磴'), Some('礓'), Some('礤'), Some('礞'), Some('礴'), Some('龛'), Some('黹'), Some('黻'), Some('黼'), Some('盱'), Some('眄'), Some('眍'), Some('盹'), Some('眇'),
    Some('眈'), Some('眚'), Some('眢'), Some('眙'), Some('眭'), Some('眦'), Some('眵'), Some('眸'), Some('睐'), Some('睑'), Some('睇'), Some('睃'), Some('睚'), Some('睨'), Some('睢'), Some('睥'),
    Some('睿'), Some('瞍'), Some('睽'), Some('瞀'), Some('瞌'), Some('瞑'), Some('瞟'), Some('瞠'), Some('瞰'), Some('瞵'), Some('瞽'), Some('町'), Some('畀'), Some('畎'), Some('畋'), Some('畈'),
    Some('畛'), Some('畲'), Some('畹'), Some('疃'), Some('罘'), Some('罡'), Some('罟'), Some('詈'), Some('罨'), Some('罴'), Some('罱'), Some('罹'), Some('羁'), Some('罾'), Some('盍'), Some('盥'),
    Some('蠲'), Some('钅'), Some('钆'), Some('钇'), Some('钋'), Some('钊'), Some('钌'), Some('钍'), Some('钏'), Some('钐'), Some('钔'), Some('钗'), Some('钕'), Some('钚'), Some('钛'), Some('钜'),
    Some('钣'), Some('钤'), Some('钫'), Some('钪'), Some('钭'), Some('钬'), Some('钯'), Some('钰'), Some('钲'), Some('钴'), Some('钶'), Some('钷'), Some('钸'), Some('钹'), Some('钺'), Some('钼'),
    Some('钽'), Some('钿'), Some('铄'), Some('铈'), Some('铉'), Some('铊'), Some('铋'), Some('铌'), Some('铍'), Some('铎'), Some('铐'), Some('铑'), Some('铒'), Some('铕'), Some('铖'), Some('铗'),
    Some('铙'), Some('铘'), Some('铛'), Some('铞'), Some('铟'), Some('铠'), Some('铢'), Some('铤'), Some('铥'), Some('铧'), Some('铨'), Some('铪'), Some('铩'), Some('铫'), Some('铮'), Some('铯'),
    Some('铳'), Some('铴'), Some('铵'), Some('铷'), Some('铹'), Some('铼'), Some('铽'), None, None, None, None, None, None, None, None, None,
    // 0x1Axx
    Some('铿'), Some('锃'), Some('锂'), Some('锆'), Some('锇'), Some('锉'), Some('锊'), Some('锍'), Some('锎'), Some('锏'), Some('锒'), Some('锓'), Some('锔'), Some('锕'), Some('锖'), Some('锘'),
    Some('锛'), Some('锝'), Some('锞'), Some('锟'), Some('锢'), Some('锪'), Some('锫'), Some('锩'), Some('锬'), Some('锱'), Some('锲'), Some('锴'), Some('锶'), Some('锷'), Some('锸'), Some('锼'),
    Some('锾'), Some('锿'), Some('镂'), Some('锵'), Some('镄'), Some('镅'), Some('镆'), Some('镉'), Some('镌'), Some('镎'), Some('镏'), Some('镒'), Some('镓'), Some('镔'), Some('镖'), Some('镗'),
    Some('镘'), Some('镙'), Some('镛'), Some('镞'), Some('镟'), Some('镝'), Some('镡'), Some('镢'), Some('镤'), Some('镥'), Some('镦'), Some('镧'), Some('镨'), Some('镩'), Some('镪'), Some('镫'),
    Some('镬'), Some('镯'), Some('镱'), Some('镲'), Some('镳'), Some('锺'), Some('矧'), Some('矬'), Some('雉'), Some('秕'), Some('秭'), Some('秣'), Some('秫'), Some('稆'), Some('嵇'), Some('稃'),
    Some('稂'), Some('稞'), Some('稔'), Some('稹'), Some('稷'), Some('穑'), Some('黏'), Some('馥'), Some('穰'), Some('皈'), Some('皎'), Some('皓'), Some('皙'), Some('皤'), Some('瓞'), Some('瓠'),
    Some('甬'), Some('鸠'), Some('鸢'), Some('鸨'), Some('鸩'), Some('鸪'), Some('鸫'), Some('鸬'), Some('鸲'), Some('鸱'), Some('鸶'), Some('鸸'), Some('鸷'), Some('鸹'), Some('鸺'), Some('鸾'),
    Some('鹁'), Some('鹂'), Some('鹄'), Some('鹆'), Some('鹇'), Some('鹈'), Some('鹉'), Some('鹋'), Some('鹌'), Some('鹎'), Some('鹑'), Some('鹕'), Some('鹗'), Some('鹚'), Some('鹛'), Some('鹜'),
    Some('鹞'), Some('鹣'), Some('鹦'), Some('鹧'), Some('鹨'), Some('鹩'), Some('鹪'), Some('鹫'), Some('鹬'), Some('鹱'), Some('鹭'), Some('鹳'), Some('疒'), Some('疔'), Some('疖'), Some('疠'),
    Some('疝'), Some('疬'), Some('疣'), Some('疳'), Some('疴'), Some('疸'), Some('痄'), Some('疱'), Some('疰'), Some('痃'), Some('痂'), Some('痖'), Some('痍'), Some('痣'), Some('痨'), Some('痦'),
    Some('痤'), Some('痫'), Some('痧'), Some('瘃'), Some('痱'), Some('痼'), Some('痿'), Some('瘐'), Some('瘀'), Some('瘅'), Some('瘌'), Some('瘗'), Some('瘊'), Some('瘥'), Some('瘘'), Some('瘕'),
    Some('瘙'), Some('瘛'), Some('瘼'), Some('瘢'), Some('瘠'), Some('癀'), Some('瘭'), Some('瘰'), Some('瘿'), Some('瘵'), Some('癃'), Some('瘾'), Some('瘳'), Some('癍'), Some('癞'), Some('癔'),
    Some('癜'), Some('癖'), Some('癫'), Some('癯'), Some('翊'), Some('竦'), Some('穸'), Some('穹'), Some('窀'), Some('窆'), Some('窈'), Some('窕'), Some('窦'), Some('窠'), Some('窬'), Some('窨'),
    Some('窭'), Some('窳'), Some('衤'), Some('衩'), Some('衲'), Some('衽'), Some('衿'), Some('袂'), Some('袢'), Some('裆'), Some('袷'), Some('袼'), Some('裉'), Some('裢'), Some('裎'), Some('裣'),
    Some('裥'), Some('裱'), Some('褚'), Some('裼'), Some('裨'), Some('裾'), Some('裰'), Some('褡'), Some('褙'), Some('褓'), Some('褛'), Some('褊'), Some('褴'), Some('褫'), Some('褶'), Some('襁'),
    Some('襦'), Some('襻'), Some('疋'), Some('胥'), Some('皲'), Some('皴'), Some('矜'), None, None, None, None, None, None, None, None, None,
    // 0x1Bxx
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    // 0x1Cxx
    Some('耒'), Some('耔'), Some('耖'), Some('耜'), Some('耠'), Some('耢'), Some('耥'), Some('耦'), Some('耧'), Some('耩'), Some('耨'), Some('耱'), Some('耋'), Some('耵'), Some('聃'), Some('聆'),
    Some('聍'), Some('聒'), Some('聩'), Some('聱'), Some('覃'), Some('顸'), Some('颀'), Some('颃'), Some('颉'), Some('颌'), Some('颍'), Some('颏'), Some('颔'), Some('颚'), Some('颛'), Some('颞'),
    Some('颟'), Some('颡'), Some('颢'), Some('颥'), Some('颦'), Some('虍'), Some('虔'), Some('虬'), Some('虮'), Some('虿'), Some('虺'), Some('虼'), Some('虻'), Some('蚨'), Some('蚍'), Some('蚋'),
    Some('蚬'), Some('蚝'), Some('蚧'), Some('蚣'), Some('蚪'), Some('蚓'), Some('蚩'), Some('蚶'), Some('蛄'), Some('蚵'), Some('蛎'), Some('蚰'), Some('蚺'), Some('蚱'), Some('蚯'), Some('蛉'),
    Some('蛏'), Some('蚴'), Some('蛩'), Some('蛱'), Some('蛲'), Some('蛭'), Some('蛳'), Some('蛐'), Some('蜓'), Some('蛞'), Some('蛴'), Some('蛟'), Some('蛘'), Some('蛑'), Some('蜃'), Some('蜇'),
    Some('蛸'), Some('蜈'), Some('蜊'), Some('蜍'), Some('蜉'), Some('蜣'), Some('蜻'), Some('蜞'), Some('蜥'), Some('蜮'), Some('蜚'), Some('蜾'), Some('蝈'), Some('蜴'), Some('蜱'), Some('蜩'),
    Some('蜷'), Some('蜿'), Some('螂'), Some('蜢'), Some('蝽'), Some('蝾'), Some('蝻'), Some('蝠'), Some('蝰'), Some('蝌'), Some('蝮'), Some('螋'), Some('蝓'), Some('蝣'), Some('蝼'), Some('蝤'),
    Some('蝙'), Some('蝥'), Some('螓'), Some('螯'), Some('螨'), Some('蟒'), Some('蟆'), Some('螈'), Some('螅'), Some('螭'), Some('螗'), Some('螃'), Some('螫'), Some('蟥'), Some('螬'), Some('螵'),
    Some('螳'), Some('蟋'), Some('蟓'), Some('螽'), Some('蟑'), Some('蟀'), Some('蟊'), Some('蟛'), Some('蟪'), Some('蟠'), Some('蟮'), Some('蠖'), Some('蠓'), Some('蟾'), Some('蠊'), Some('蠛'),
    Some('蠡'), Some('蠹'), Some('蠼'), Some('缶'), Some('罂'), Some('罄'), Some('罅'), Some('舐'), Some('竺'), Some('竽'), Some('笈'), Some('笃'), Some('笄'), Some('笕'), Some('笊'), Some('笫'),
    Some('笏'), Some('筇'), Some('笸'), Some('笪'), Some('笙'), Some('笮'), Some('笱'), Some('笠'), Some('笥'), Some('笤'), Some('笳'), Some('笾'), Some('笞'), Some('筘'), Some('筚'), Some('筅'),
    Some('筵'), Some('筌'), Some('筝'), Some('筠'), Some('筮'), Some('筻'), Some('筢'), Some('筲'), Some('筱'), Some('箐'), Some('箦'), Some('箧'), Some('箸'), Some('箬'), Some('箝'), Some('箨'),
    Some('箅'), Some('箪'), Some('箜'), Some('箢'), Some('箫'), Some('箴'), Some('篑'), Some('篁'), Some('篌'), Some('篝'), Some('篚'), Some('篥'), Some('篦'), Some('篪'), Some('簌'), Some('篾'),
    Some('篼'), Some('簏'), Some('簖'), Some('簋'), Some('簟'), Some('簪'), Some('簦'), Some('簸'), Some('籁'), Some('籀'), Some('臾'), Some('舁'), Some('舂'), Some('舄'), Some('臬'), Some('衄'),
    Some('舡'), Some('舢'), Some('舣'), Some('舭'), Some('舯'), Some('舨'), Some('舫'), Some('舸'), Some('舻'), Some('舳'), Some('舴'), Some('舾'), Some('艄'), Some('艉'), Some('艋'), Some('艏'),
    Some('艚'), Some('艟'), Some('艨'), Some('衾'), Some('袅'), Some('袈'), Some('裘'), None, None, None, None, None, None, None, None, None,
    // 0x1Dxx
    Some('裟'), Some('襞'), Some('羝'), Some('羟'), Some('羧'), Some('羯'), Some('羰'), Some('羲'), Some('籼'), Some('敉'), Some('粑'), Some('粝'), Some('粜'), Some('粞'), Some('粢'), Some('粲'),
    Some('粼'), Some('粽'), Some('糁'), Some('糇'), Some('糌'), Some('糍'), Some('糈'), Some('糅'), Some('糗'), Some('糨'), Some('艮'), Some('暨'), Some('羿'), Some('翎'), Some('翕'), Some('翥'),
    Some('翡'), Some('翦'), Some('翩'), Some('翮'), Some('翳'), Some('糸'), Some('絷'), Some('綦'), Some('綮'), Some('繇'), Some('纛'), Some('麸'), Some('麴'), Some('赳'), Some('趄'), Some('趔'),
    Some('趑'), Some('趱'), Some('赧'), Some('赭'), Some('豇'), Some('豉'), Some('酊'), Some('酐'), Some('酎'), Some('酏'), Some('酤'), Some('酢'), Some('酡'), Some('酰'), Some('酩'), Some('酯'),
    Some('酽'), Some('酾'), Some('酲'), Some('酴'), Some('酹'), Some('醌'), Some('醅'), Some('醐'), Some('醍'), Some('醑'), Some('醢'), Some('醣'), Some('醪'), Some('醭'), Some('醮'), Some('醯'),
    Some('醵'), Some('醴'), Some('醺'), Some('豕'), Some('鹾'), Some('趸'), Some('跫'), Some('踅'), Some('蹙'), Some('蹩'), Some('趵'), Some('趿'), Some('趼'), Some('趺'), Some('跄'), Some('跖'),
    Some('跗'), Some('跚'), Some('跞'), Some('跎'), Some('跏'), Some('跛'), Some('跆'), Some('跬'), Some('跷'), Some('跸'), Some('跣'), Some('跹'), Some('跻'), Some('跤'), Some('踉'), Some('跽'),
    Some('踔'), Some('踝'), Some('踟'), Some('踬'), Some('踮'), Some('踣'), Some('踯'), Some('踺'), Some('蹀'), Some('踹'), Some('踵'), Some('踽'), Some('踱'), Some('蹉'), Some('蹁'), Some('蹂'),
    Some('蹑'), Some('蹒'), Some('蹊'), Some('蹰'), Some('蹶'), Some('蹼'), Some('蹯'), Some('蹴'), Some('躅'), Some('躏'), Some('躔'), Some('躐'), Some('躜'), Some('躞'), Some('豸'), Some('貂'),
    Some('貊'), Some('貅'), Some('貘'), Some('貔'), Some('斛'), Some('觖'), Some('觞'), Some('觚'), Some('觜'), Some('觥'), Some('觫'), Some('觯'), Some('訾'), Some('謦'), Some('靓'), Some('雩'),
    Some('雳'), Some('雯'), Some('霆'), Some('霁'), Some('霈'), Some('霏'), Some('霎'), Some('霪'), Some('霭'), Some('霰'), Some('霾'), Some('龀'), Some('龃'), Some('龅'), Some('龆'), Some('龇'),
    Some('龈'), Some('龉'), Some('龊'), Some('龌'), Some('黾'), Some('鼋'), Some('鼍'), Some('隹'), Some('隼'), Some('隽'), Some('雎'), Some('雒'), Some('瞿'), Some('雠'), Some('銎'), Some('銮'),
    Some('鋈'), Some('錾'), Some('鍪'), Some('鏊'), Some('鎏'), Some('鐾'), Some('鑫'), Some('鱿'), Some('鲂'), Some('鲅'), Some('鲆'), Some('鲇'), Some('鲈'), Some('稣'), Some('鲋'), Some('鲎'),
    Some('鲐'), Some('鲑'), Some('鲒'), Some('鲔'), Some('鲕'), Some('鲚'), Some('鲛'), Some('鲞'), Some('鲟'), Some('鲠'), Some('鲡'), Some('鲢'), Some('鲣'), Some('鲥'), Some('鲦'), Some('鲧'),
    Some('鲨'), Some('鲩'), Some('鲫'), Some('鲭'), Some('鲮'), Some('鲰'), Some('鲱'), Some('鲲'), Some('鲳'), Some('鲴'), Some('鲵'), Some('鲶'), Some('鲷'), Some('鲺'), Some('鲻'), Some('鲼'),
    Some('鲽'), Some('鳄'), Some('鳅'), Some('鳆'), Some('鳇'), Some('鳊'), Some('鳋'), None, None, None, None, None, None, None, None, None,
    // 0x1Exx
    Some('鳌'), Some('鳍'), Some('鳎'), Some('鳏'), Some('鳐'), Some('鳓'), Some('鳔'), Some('鳕'), Some('鳗'), Some('鳘'), Some('鳙'), Some('鳜'), Some('鳝'), Some('鳟'), Some('鳢'), Some('靼'),
    Some('鞅'), Some('鞑'), Some('鞒'), Some('鞔'), Some('鞯'), Some('鞫'), Some('鞣'), Some('鞲'), Some('鞴'), Some('骱'), Some('骰'), Some('骷'), Some('鹘'), Some('骶'), Some('骺'), Some('骼'),
    Some('髁'), Some('髀'), Some('髅'), Some('髂'), Some('髋'), Some('髌'), Some('髑'), Some('魅'), Some('魃'), Some('魇'), Some('魉'), Some('魈'), Some('魍'), Some('魑'), Some('飨'), Some('餍'),
    Some('餮'), Some('饕'), Some('饔'), Some('髟'), Some('髡'), Some('髦'), Some('髯'), Some('髫'), Some('髻'), Some('髭'), Some('髹'), Some('鬈'), Some('鬏'), Some('鬓'), Some('鬟'), Some('鬣'),
    Some('麽'), Some('麾'), Some('縻'), Some('麂'), Some('麇'), Some('麈'), Some('麋'), Some('麒'), Some('鏖'), Some('麝'), Some('麟'), Some('黛'), Some('黜'), Some('黝'), Some('黠'), Some('黟'),
    Some('黢'), Some('黩'), Some('黧'), Some('黥'), Some('黪'), Some('黯'), Some('鼢'), Some('鼬'), Some('鼯'), Some('鼹'), Some('鼷'), Some('鼽'), Some('鼾'), Some('齄'), Some('祐'), Some('咲'),
    Some('冴'), Some('広'), None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    Some('Ａ'), Some('Ｂ'), Some('Ｃ'), Some('Ｄ'), Some('Ｅ'), Some('Ｆ'), Some('Ｇ'), Some('Ｈ'), Some('Ｉ'), Some('Ｊ'), Some('Ｋ'), Some('Ｌ'), Some('Ｍ'), Some('Ｎ'), Some('Ｏ'), Some('Ｐ'),
    Some('Ｑ'), Some('Ｒ'), Some('Ｓ'), Some('Ｔ'), Some('Ｕ'), Some('Ｖ'), Some('Ｗ'), Some('Ｘ'), Some('Ｙ'), Some('Ｚ'), Some('ａ'), Some('ｂ'), Some('ｃ'), Some('ｄ'), Some('ｅ'), Some('ｆ'),
    Some('ｇ'), Some('ｈ'), Some('ｉ'), Some('ｊ'), Some('ｋ'), Some('ｌ'), Some('ｍ'), Some('ｎ'), Some('ｏ'), Some('ｐ'), Some('ｑ'), Some('ｒ'), Some('ｓ'), Some('ｔ'), Some('ｕ'), Some('ｖ'),
    Some('ｗ'), Some('ｘ'), Some('ｙ'), Some('ｚ'), Some('０'), Some('１'), Some('２'), Some('３'), Some('４'), Some('５'), Some('６'), Some('７'), Some('８'), Some('９'), Some('Ⅰ'), Some('Ⅱ'),
    Some('Ⅲ'), Some('Ⅳ'), Some('Ⅴ'), Some('Ⅵ'), Some('Ⅶ'), Some('Ⅷ'), Some('Ⅸ'), Some('Ⅹ'), Some('Ⅺ'), Some('Ⅻ'), Some('，'), Some('、'), Some('：'), Some('；'), Some('。'), Some('！'),
    Some('？'), Some('•'), Some('～'), Some('—'), None, None, Some('（'), Some('）'), Some('【'), Some('】'), Some('《'), Some('》'), None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
];
